//! Status bar at the bottom of the screen: key hints above, footer below.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_MESSAGE_TIMEOUT_SECS;
use crate::ui::state::{AppState, Focus};

pub const FOOTER: &str = "© 2025 Cố vấn An toàn Giao thông | Luôn lái xe an toàn, tuân thủ luật lệ";

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let badge = |key: &str, color: ratatui::style::Color| -> Span {
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(t.bg_dark)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };
    let dim =
        |text: &str| -> Span { Span::styled(text.to_string(), Style::default().fg(t.text_dim)) };

    let mut spans = vec![Span::raw(" ")];
    if state.focus == Focus::Content {
        spans.extend([
            badge("q", t.accent),
            dim(" Thoát "),
            badge("Tab", t.accent),
            dim(" Chuyển tab "),
            badge("↑↓", t.accent),
            dim(" Cuộn "),
            badge("i", t.accent),
            dim(" Hỏi "),
            badge("T", t.accent),
            dim(&format!(" Màu: {} ", t.name)),
            badge("?", t.accent),
            dim(" Trợ giúp "),
        ]);
    } else {
        spans.extend([
            badge("Enter", t.accent),
            dim(" Gửi "),
            badge("Esc", t.accent),
            dim(" Rời ô nhập "),
            badge("Ctrl+L", t.accent),
            dim(" Xóa "),
        ]);
    }

    // `c` only opens the widget outside the input lines.
    if !state.floating_open && state.focus == Focus::Content {
        spans.push(badge("c", t.eco));
        spans.push(Span::styled(
            " 💬 Chat ngay ",
            Style::default().fg(t.eco).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some((msg, when)) = &state.status_message {
        if when.elapsed().as_secs() < STATUS_MESSAGE_TIMEOUT_SECS {
            spans.push(Span::styled(
                format!("  {} ", msg),
                Style::default().fg(t.brand).add_modifier(Modifier::BOLD),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let footer = Paragraph::new(Line::from(Span::styled(
        FOOTER,
        Style::default().fg(t.text_muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, rows[1]);
}
