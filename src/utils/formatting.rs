//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI escape sequences.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Display width of `s` in terminal columns, ignoring ANSI sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad on the right to `width` visible columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Pad on the left to `width` visible columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Minutes in a human readable form: `74` → `01h 14m`.
pub fn mins2readable(mins: u32) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// A horizontal bar of `width` cells filled to `value / max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max <= 0.0 {
        0
    } else {
        ((value / max) * width as f64).round().clamp(0.0, width as f64) as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_is_ignored_for_width() {
        let coloured = "\x1b[32mdone\x1b[0m";
        assert_eq!(strip_ansi(coloured), "done");
        assert_eq!(visible_width(coloured), 4);
        assert_eq!(visible_width(&pad_right(coloured, 8)), 8);
        assert_eq!(pad_left("7", 3), "  7");
    }

    #[test]
    fn readable_minutes() {
        assert_eq!(mins2readable(74), "01h 14m");
        assert_eq!(mins2readable(0), "00h 00m");
    }

    #[test]
    fn bars_scale_to_width() {
        assert_eq!(bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(bar(0.0, 0.0, 4), "░░░░");
        assert_eq!(bar(200.0, 100.0, 4), "████");
    }
}
