//! Shared rendering helpers: scrollbar, popup placement, input line with cursor.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;
use crate::utils::tail_to_width;

/// Render a vertical scrollbar on the right side of `area`.
///
/// Only renders if `total > visible_height`.
pub fn render_scrollbar(frame: &mut Frame, area: Rect, total: usize, position: usize) {
    let visible_height = area.height as usize;
    if total <= visible_height {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"));
    let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible_height)).position(position);
    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}

/// Return a `Rect` centered within `area` with the given dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Return a `Rect` anchored to the bottom-right corner of `area`, `margin`
/// cells away from the right and bottom edges, shrunk to fit.
pub fn bottom_right_rect(width: u16, height: u16, margin: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(margin));
    let height = height.min(area.height.saturating_sub(margin));
    Rect {
        x: area.x + area.width.saturating_sub(width + margin),
        y: area.y + area.height.saturating_sub(height + margin),
        width,
        height,
    }
}

/// Build the single-line view of an input buffer.
///
/// Empty and unfocused buffers show `placeholder`. A focused buffer draws a
/// block cursor at `cursor_pos` and scrolls horizontally so the cursor stays
/// inside `width` columns.
pub fn input_line<'a>(
    input: &'a str,
    cursor_pos: usize,
    placeholder: &'a str,
    focused: bool,
    width: usize,
    t: &Theme,
) -> Line<'a> {
    let text_style = Style::default().fg(t.text_primary);
    if !focused {
        if input.is_empty() {
            return Line::from(Span::styled(placeholder, Style::default().fg(t.text_muted)));
        }
        return Line::from(Span::styled(tail_to_width(input, width), text_style));
    }

    let before = &input[..cursor_pos];
    let after = &input[cursor_pos..];
    let (under, rest) = match after.char_indices().nth(1) {
        Some((i, _)) => (&after[..i], &after[i..]),
        None if after.is_empty() => (" ", ""),
        None => (after, ""),
    };

    // Reserve one column for the cursor cell.
    let before = tail_to_width(before, width.saturating_sub(1));
    let room = width.saturating_sub(UnicodeWidthStr::width(before) + 1);
    let rest = head_to_width(rest, room);

    let cursor_style = Style::default().fg(t.bg_dark).bg(t.accent);
    let mut spans = vec![
        Span::styled(before, text_style),
        Span::styled(under, cursor_style),
        Span::styled(rest, text_style),
    ];
    if input.is_empty() {
        spans.push(Span::styled(format!(" {}", placeholder), Style::default().fg(t.text_muted)));
    }
    Line::from(spans)
}

/// Keep the head of `s` that fits in `width` columns.
fn head_to_width(s: &str, width: usize) -> &str {
    let mut end = 0;
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw > width {
            break;
        }
        used += cw;
        end = i + c.len_utf8();
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    // ── centered_rect ─────────────────────────────────────────────

    #[test]
    fn centered_rect_normal() {
        let area = Rect::new(0, 0, 100, 50);
        let r = centered_rect(40, 20, area);
        assert_eq!(r, Rect::new(30, 15, 40, 20));
    }

    #[test]
    fn centered_rect_larger_than_area() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect(40, 30, area);
        assert_eq!(r, Rect::new(0, 0, 20, 10));
    }

    // ── bottom_right_rect ─────────────────────────────────────────

    #[test]
    fn bottom_right_rect_anchors_with_margin() {
        let area = Rect::new(0, 5, 100, 40);
        let r = bottom_right_rect(44, 20, 1, area);
        assert_eq!(r, Rect::new(55, 24, 44, 20));
        assert_eq!(r.right(), area.right() - 1);
        assert_eq!(r.bottom(), area.bottom() - 1);
    }

    #[test]
    fn bottom_right_rect_shrinks_on_small_area() {
        let area = Rect::new(0, 0, 30, 12);
        let r = bottom_right_rect(44, 20, 1, area);
        assert_eq!(r.width, 29);
        assert_eq!(r.height, 11);
        assert_eq!(r.x, 0);
        assert_eq!(r.y, 0);
    }

    // ── input_line ────────────────────────────────────────────────

    #[test]
    fn unfocused_empty_shows_placeholder() {
        let t = Theme::default_dark();
        let line = input_line("", 0, "Hỏi gì đó...", false, 20, &t);
        assert_eq!(line_text(&line), "Hỏi gì đó...");
    }

    #[test]
    fn focused_cursor_at_end_adds_block() {
        let t = Theme::default_dark();
        let line = input_line("abc", 3, "", true, 20, &t);
        assert_eq!(line.spans[0].content, "abc");
        assert_eq!(line.spans[1].content, " ");
        assert_eq!(line.spans[2].content, "");
    }

    #[test]
    fn focused_cursor_in_middle_highlights_char() {
        let t = Theme::default_dark();
        let input = "tốc";
        let pos = "t".len();
        let line = input_line(input, pos, "", true, 20, &t);
        assert_eq!(line.spans[0].content, "t");
        assert_eq!(line.spans[1].content, "ố");
        assert_eq!(line.spans[2].content, "c");
    }

    #[test]
    fn focused_long_input_keeps_cursor_visible() {
        let t = Theme::default_dark();
        let input = "abcdefghij";
        let line = input_line(input, input.len(), "", true, 5, &t);
        // four chars of context + the cursor cell
        assert_eq!(line.spans[0].content, "ghij");
        assert_eq!(line.spans[1].content, " ");
    }

    #[test]
    fn head_to_width_cuts_at_columns() {
        assert_eq!(head_to_width("abcdef", 3), "abc");
        assert_eq!(head_to_width("độ", 1), "đ");
        assert_eq!(head_to_width("", 4), "");
    }
}
