//! Shared utility functions used across modules.

use unicode_width::UnicodeWidthStr;

use crate::constants::{SPINNER_CHARS, SPINNER_TICK_DIVISOR};

/// Get the spinner character for the current tick.
pub fn spinner_char(tick: u64) -> &'static str {
    let frame = tick / SPINNER_TICK_DIVISOR;
    SPINNER_CHARS[(frame % SPINNER_CHARS.len() as u64) as usize]
}

/// Get animated loading dots for the current tick.
pub fn loading_dots(tick: u64) -> &'static str {
    match (tick / SPINNER_TICK_DIVISOR) % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

/// Pad `s` with spaces on the right until it occupies `width` terminal columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Center `s` within `width` terminal columns.
pub fn center_in_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(width - w - left))
}

/// Keep the tail of `s` that fits in `width` columns.
pub fn tail_to_width(s: &str, width: usize) -> &str {
    let mut start = s.len();
    let mut used = 0;
    for (i, c) in s.char_indices().rev() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw > width {
            break;
        }
        used += cw;
        start = i;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── spinner / dots ────────────────────────────────────────────

    #[test]
    fn spinner_advances_every_divisor_ticks() {
        assert_eq!(spinner_char(0), SPINNER_CHARS[0]);
        assert_eq!(spinner_char(SPINNER_TICK_DIVISOR - 1), SPINNER_CHARS[0]);
        assert_eq!(spinner_char(SPINNER_TICK_DIVISOR), SPINNER_CHARS[1]);
    }

    #[test]
    fn spinner_wraps() {
        let full_cycle = SPINNER_TICK_DIVISOR * SPINNER_CHARS.len() as u64;
        assert_eq!(spinner_char(full_cycle), SPINNER_CHARS[0]);
    }

    #[test]
    fn loading_dots_cycle() {
        let d = SPINNER_TICK_DIVISOR;
        assert_eq!(loading_dots(0), "");
        assert_eq!(loading_dots(d), ".");
        assert_eq!(loading_dots(2 * d), "..");
        assert_eq!(loading_dots(3 * d), "...");
        assert_eq!(loading_dots(4 * d), "");
    }

    // ── width helpers ─────────────────────────────────────────────

    #[test]
    fn pad_to_width_counts_columns_not_bytes() {
        let padded = pad_to_width("Luật", 6);
        assert_eq!(padded, "Luật  ");
    }

    #[test]
    fn pad_to_width_never_truncates() {
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    }

    #[test]
    fn center_in_width_splits_padding() {
        assert_eq!(center_in_width("ab", 6), "  ab  ");
        assert_eq!(center_in_width("ab", 5), " ab  ");
        assert_eq!(center_in_width("abc", 2), "abc");
    }

    #[test]
    fn tail_to_width_keeps_end() {
        assert_eq!(tail_to_width("hello world", 5), "world");
        assert_eq!(tail_to_width("tốc độ", 3), " độ");
        assert_eq!(tail_to_width("abc", 10), "abc");
        assert_eq!(tail_to_width("abc", 0), "");
    }
}
