//! Formatting utilities used for CLI and report outputs.

use chrono::Duration;
use unicode_width::UnicodeWidthStr;

/// Format a signed duration as "HH:MM", sign only when negative.
/// Zero renders as "00:00"; hours grow past two digits as needed.
pub fn format_delta(d: Duration) -> String {
    let mins = d.num_minutes();
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Pad to a display width, not a char count, so translated labels with
/// accented characters keep report columns aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}
