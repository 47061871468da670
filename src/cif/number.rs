/// Removes every parenthesized annotation from a value.
///
/// CIF numbers carry their standard uncertainty in parentheses (`5.431(2)`),
/// and some temperature fields carry a secondary reading the same way
/// (`300(5)`). Nested parentheses are not part of the format; the first `)`
/// closes the group.
pub fn strip_annotations(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

/// Returns `true` for the CIF placeholders `?` (unknown) and `.` (inapplicable).
pub fn is_placeholder(value: &str) -> bool {
    matches!(value.trim(), "?" | ".")
}

/// Parse a CIF numeric value, ignoring any standard uncertainty.
///
/// Returns `None` for placeholders and for anything that is not a number
/// once annotations are removed.
pub fn parse_number(value: &str) -> Option<f64> {
    if is_placeholder(value) {
        return None;
    }
    strip_annotations(value).trim().parse::<f64>().ok()
}
