//! Console progress bar shown while a directory is ingested.

use std::io::{self, Write};

/// Width of the progress bar in characters
pub const BAR_LENGTH: usize = 20;

/// Render one progress line, e.g. `Progress: [--------->          ] 50%`.
///
/// `current` counts files started so far (1-based).
pub fn render(current: usize, total: usize, bar_length: usize) -> String {
    let fraction = if total == 0 {
        1.0
    } else {
        current as f64 / total as f64
    };

    let dashes = (fraction * bar_length as f64 - 1.0).max(0.0) as usize;
    let mut arrow = "-".repeat(dashes);
    arrow.push('>');
    let padding = " ".repeat(bar_length.saturating_sub(arrow.len()));

    format!(
        "Progress: [{arrow}{padding}] {}%",
        (fraction * 100.0) as usize
    )
}

/// Print the progress line in place; the last line ends with a newline.
pub fn print(current: usize, total: usize) {
    let ending = if current >= total { "\n" } else { "\r" };
    let line = render(current, total, BAR_LENGTH);

    let mut stdout = io::stdout().lock();
    // Progress output is best-effort
    let _ = write!(stdout, "{line}{ending}");
    let _ = stdout.flush();
}
