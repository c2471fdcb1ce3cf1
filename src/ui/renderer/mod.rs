//! Renderer module: split into focused submodules.
//!
//! - `header`: Title, subtitle, tab strip
//! - `content`: Card lists for the three tabs
//! - `chat`: Message bubbles and input shared by both chat panels
//! - `floating`: The floating chat popup
//! - `status_bar`: Key hints, "Chat ngay" button, footer
//! - `overlays`: Help popup
//! - `helpers`: Shared rendering utilities

mod chat;
mod content;
mod floating;
mod header;
pub mod helpers;
mod overlays;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::constants::{HEADER_HEIGHT, MAIN_CHAT_PERCENT};

use super::state::AppState;

pub use header::tab_at_column;

/// Screen regions, shared by rendering and scroll clamping.
pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub main_chat: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Title + tabs
                Constraint::Min(8),                // Body
                Constraint::Length(2),             // Status bar + footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - MAIN_CHAT_PERCENT),
                Constraint::Percentage(MAIN_CHAT_PERCENT),
            ])
            .split(rows[1]);

        Self {
            header: rows[0],
            content: body[0],
            main_chat: body[1],
            status: rows[2],
        }
    }

    /// Body rows (content + main chat). The floating widget sits inside these.
    pub fn body(&self) -> Rect {
        self.content.union(self.main_chat)
    }
}

/// Top-level render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let size = frame.area();
    let layout = ScreenLayout::new(size);

    header::render_header(frame, layout.header, state);
    content::render_content(frame, layout.content, state);
    chat::render_main_chat(frame, layout.main_chat, state);
    status_bar::render_status_bar(frame, layout.status, state);

    if state.floating_open {
        floating::render_floating_chat(frame, layout.body(), state);
    }

    if state.show_help {
        overlays::render_help_overlay(frame, size, state);
    }
}

/// Largest useful content scroll offset for a screen of size `area`.
pub fn max_content_scroll(area: Rect, state: &AppState) -> usize {
    let layout = ScreenLayout::new(area);
    content::max_scroll(layout.content, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloatingConfig;
    use crate::ui::state::Tab;
    use crate::ui::theme::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn make_state(tab: Tab) -> AppState {
        AppState::new(tab, Theme::default_dark(), false, FloatingConfig::default())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn layout_splits_screen() {
        let l = ScreenLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(l.header.height, HEADER_HEIGHT);
        assert_eq!(l.status.height, 2);
        assert_eq!(l.content.y, l.main_chat.y);
        assert_eq!(l.content.right(), l.main_chat.x);
        assert_eq!(l.body().width, 120);
    }

    #[test]
    fn renders_title_tabs_and_main_greeting() {
        let s = make_state(Tab::Environment);
        let text = draw(&s, 140, 40);
        assert!(text.contains("Cố vấn An toàn Giao thông"));
        assert!(text.contains("Tips Lái xe"));
        assert!(text.contains("Luật Giao thông"));
        assert!(text.contains("Mình là cố vấn"));
    }

    #[test]
    fn laws_tab_shows_regulation_heading() {
        let s = make_state(Tab::Laws);
        let text = draw(&s, 140, 60);
        assert!(text.contains("Điều luật:"));
        assert!(text.contains("Hình phạt:"));
    }

    #[test]
    fn floating_widget_only_when_open() {
        let mut s = make_state(Tab::Tips);
        assert!(!draw(&s, 140, 40).contains("Sẵn sàng giúp bạn"));
        s.open_floating();
        assert!(draw(&s, 140, 40).contains("Sẵn sàng giúp bạn"));
    }

    #[test]
    fn help_overlay_shows_every_line() {
        let mut s = make_state(Tab::Environment);
        s.show_help = true;
        let text = draw(&s, 140, 60);
        assert!(text.contains("Phím tắt"));
        assert!(text.contains("Nhấp tab"));
        assert!(text.contains("Nhấn phím bất kỳ để đóng"));
    }

    #[test]
    fn chat_now_hint_only_outside_inputs() {
        let mut s = make_state(Tab::Environment);
        assert!(draw(&s, 140, 40).contains("Chat ngay"));
        s.focus_main_input();
        assert!(!draw(&s, 140, 40).contains("Chat ngay"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut s = make_state(Tab::Environment);
        s.open_floating();
        s.show_help = true;
        draw(&s, 10, 5);
    }

    #[test]
    fn max_scroll_zero_on_huge_screen() {
        let s = make_state(Tab::Tips);
        assert_eq!(max_content_scroll(Rect::new(0, 0, 200, 500), &s), 0);
        assert!(max_content_scroll(Rect::new(0, 0, 80, 20), &s) > 0);
    }
}
