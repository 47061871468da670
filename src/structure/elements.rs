/// Element symbols by atomic number (index 0 is hydrogen).
pub const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Whether `symbol` is a known element symbol (deuterium included)
pub fn is_element(symbol: &str) -> bool {
    symbol == "D" || ELEMENT_SYMBOLS.contains(&symbol)
}

/// Species parsed from an atom-site type symbol or label, e.g. `Fe3+`, `O2-`, `Ca1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSpecies {
    /// Element symbol
    pub element: String,
    /// Oxidation state when the symbol carries one
    pub oxidation_state: Option<f64>,
}

/// Parse the element (and oxidation state, if present) from a CIF atom symbol.
///
/// Two-letter symbols win when they name a real element (`Os1` is osmium,
/// `Oa` is oxygen). Charges are accepted as `3+`, `+3`, `2-` or `-2`; a bare
/// digit suffix on a label (`Fe1`) is a site index, not a charge.
pub fn parse_species(symbol: &str) -> Option<ParsedSpecies> {
    let symbol = symbol.trim();
    let mut chars = symbol.chars();
    let first = chars.next().filter(char::is_ascii_uppercase)?;

    let element = match chars.next() {
        Some(second) if second.is_ascii_lowercase() => {
            let pair: String = [first, second].iter().collect();
            if is_element(&pair) {
                pair
            } else {
                first.to_string()
            }
        }
        _ => first.to_string(),
    };

    if !is_element(&element) {
        return None;
    }

    let rest = &symbol[element.len()..];
    Some(ParsedSpecies {
        oxidation_state: parse_charge(rest),
        element,
    })
}

fn parse_charge(rest: &str) -> Option<f64> {
    let sign_at = rest.find(&['+', '-'][..])?;
    let sign = if rest[sign_at..].starts_with('+') { 1.0 } else { -1.0 };

    let digits_before: String = rest[..sign_at]
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let digits_after: String = rest[sign_at + 1..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let magnitude = if !digits_before.is_empty() {
        digits_before.parse::<f64>().ok()?
    } else if !digits_after.is_empty() {
        digits_after.parse::<f64>().ok()?
    } else {
        1.0
    };

    Some(sign * magnitude)
}
