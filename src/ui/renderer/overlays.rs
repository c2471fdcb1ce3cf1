//! Popup overlays: key binding help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{HELP_POPUP_HEIGHT, HELP_POPUP_WIDTH};
use crate::ui::state::AppState;

use super::helpers::centered_rect;

pub fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup_area = centered_rect(HELP_POPUP_WIDTH, HELP_POPUP_HEIGHT, area);

    frame.render_widget(Clear, popup_area);

    let help_entry = |key: &str, desc: &str, color: ratatui::style::Color| -> Line {
        Line::from(vec![
            Span::styled(
                format!("  {:<18}", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(t.text_primary)),
        ])
    };
    let section = |title: &str| -> Line {
        Line::from(Span::styled(
            format!("  {}", title),
            Style::default().fg(t.brand).add_modifier(Modifier::BOLD),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled("  🚦 Phím tắt", t.title_style())),
        Line::raw(""),
        section("Điều hướng"),
        help_entry("Tab / Shift+Tab", "Chuyển tab", t.accent),
        help_entry("1 / 2 / 3", "Chọn tab", t.accent),
        help_entry("↑↓ PgUp PgDn", "Cuộn nội dung", t.accent),
        help_entry("Home / End", "Đầu / cuối trang", t.accent),
        help_entry("T", "Đổi giao diện màu", t.accent),
        help_entry("?", "Bật / tắt trợ giúp", t.accent),
        help_entry("q / Ctrl+C", "Thoát", t.accent),
        Line::raw(""),
        section("Trò chuyện"),
        help_entry("i / Enter", "Nhập vào khung chat chính", t.eco),
        help_entry("c", "Mở chat nổi", t.eco),
        help_entry("Esc", "Đóng chat nổi", t.eco),
        help_entry("Enter", "Gửi câu hỏi", t.eco),
        help_entry("← →", "Di chuyển con trỏ", t.eco),
        help_entry("Ctrl+L", "Xóa ô nhập", t.eco),
        help_entry("Esc (khi nhập)", "Rời ô nhập", t.eco),
        Line::raw(""),
        section("Chuột"),
        help_entry("Cuộn", "Cuộn nội dung", t.tip),
        help_entry("Nhấp tab", "Chọn tab", t.tip),
        Line::raw(""),
        Line::from(Span::styled(
            "  Nhấn phím bất kỳ để đóng",
            Style::default().fg(t.text_muted),
        )),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(Span::styled(" Trợ giúp ", t.title_style()))
            .borders(Borders::ALL)
            .border_style(t.border_highlight_style()),
    );
    frame.render_widget(help, popup_area);
}
