//! Floating chat widget, anchored bottom-right over the body.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::FLOATING_MARGIN;
use crate::ui::state::{AppState, Focus};
use crate::utils::{pad_to_width, spinner_char};

use super::chat::render_chat_body;
use super::helpers::bottom_right_rect;

pub fn render_floating_chat(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let controller = &state.floating_chat;
    let focused = state.focus == Focus::FloatingInput;

    let popup = bottom_right_rect(
        state.floating_size.width,
        state.floating_size.height,
        FLOATING_MARGIN,
        area,
    );
    if popup.width < 3 || popup.height < 3 {
        return;
    }
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            t.border_highlight_style()
        } else {
            Style::default().fg(t.accent)
        });
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Messages + input
        ])
        .split(inner);

    let status = if controller.is_typing() {
        format!("{} Đang trả lời", spinner_char(state.tick_count))
    } else {
        "Sẵn sàng giúp bạn".to_string()
    };
    let title_width = chunks[0].width.saturating_sub(6) as usize;
    let header = vec![
        Line::from(vec![
            Span::styled(
                pad_to_width("💬 Cố vấn An toàn", title_width),
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Esc ✕", Style::default().fg(t.text_muted)),
        ]),
        Line::from(Span::styled(
            format!("   {}", status),
            Style::default().fg(t.text_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    render_chat_body(frame, chunks[1], controller, focused, state);
}
