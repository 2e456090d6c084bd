//! Countdown display formatting.

/// Formats remaining seconds as `MM:SS` for the logout timer label.
#[must_use]
pub fn format_countdown(remaining_secs: u32) -> String {
    let minutes = remaining_secs / 60;
    let seconds = remaining_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}
