/// ANSI color helper utilities for terminal output.
use ansi_term::{Colour, Style};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Parse `#RRGGBB` into a truecolor `Colour`. Falls back to white for
/// anything that is not a six-digit hex colour.
pub fn hex_to_colour(hex: &str) -> Colour {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Colour::White;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Colour::RGB(r, g, b),
        _ => Colour::White,
    }
}

/// Foreground style for a `#RRGGBB` colour.
pub fn fg(hex: &str) -> Style {
    hex_to_colour(hex).normal()
}

/// Foreground on background, used for the detailed table rows.
pub fn fg_on_bg(fg_hex: &str, bg_hex: &str) -> Style {
    hex_to_colour(fg_hex).on(hex_to_colour(bg_hex))
}

/// Percent colour: full → green, started → yellow, nothing → grey.
pub fn color_for_percent(pct: f64) -> &'static str {
    if pct >= 100.0 {
        GREEN
    } else if pct > 0.0 {
        YELLOW
    } else {
        GREY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(hex_to_colour("#4CAF50"), Colour::RGB(0x4C, 0xAF, 0x50));
        assert_eq!(hex_to_colour("1e1e1e"), Colour::RGB(0x1E, 0x1E, 0x1E));
        assert_eq!(hex_to_colour("#zzzzzz"), Colour::White);
        assert_eq!(hex_to_colour("#fff"), Colour::White);
    }

    #[test]
    fn percent_colours() {
        assert_eq!(color_for_percent(100.0), GREEN);
        assert_eq!(color_for_percent(50.0), YELLOW);
        assert_eq!(color_for_percent(0.0), GREY);
    }
}
