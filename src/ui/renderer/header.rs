//! Header bar: title, subtitle, tab strip.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::TAB_SLOT_WIDTH;
use crate::ui::state::{AppState, Tab};
use crate::utils::center_in_width;

pub const TITLE: &str = "Cố vấn An toàn Giao thông";
pub const SUBTITLE: &str = "Hướng dẫn lái xe an toàn và tuân thủ luật giao thông";

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    let title = Line::from(vec![
        Span::styled(" 🚦 ", Style::default().fg(t.brand_secondary)),
        Span::styled(TITLE, t.title_style()),
    ]);
    let subtitle = Line::from(Span::styled(
        format!("    {}", SUBTITLE),
        Style::default().fg(t.text_dim).add_modifier(Modifier::ITALIC),
    ));

    // Fixed-width slots keep mouse hit-testing trivial.
    let tab_spans: Vec<Span> = Tab::all()
        .iter()
        .map(|tab| {
            let label = center_in_width(tab.label(), TAB_SLOT_WIDTH as usize);
            if *tab == state.active_tab {
                Span::styled(label, t.tab_active_style())
            } else {
                Span::styled(label, t.tab_inactive_style())
            }
        })
        .collect();

    let header = Paragraph::new(vec![title, subtitle, Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.brand)),
    );
    frame.render_widget(header, area);
}

/// Map a click column on the tab strip row to a tab.
pub fn tab_at_column(x: u16) -> Option<Tab> {
    // Strip starts right after the left border.
    let offset = x.checked_sub(1)?;
    Tab::all()
        .get((offset / TAB_SLOT_WIDTH) as usize)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_at_column_maps_slots() {
        assert_eq!(tab_at_column(0), None);
        assert_eq!(tab_at_column(1), Some(Tab::Environment));
        assert_eq!(tab_at_column(TAB_SLOT_WIDTH), Some(Tab::Environment));
        assert_eq!(tab_at_column(TAB_SLOT_WIDTH + 1), Some(Tab::Tips));
        assert_eq!(tab_at_column(2 * TAB_SLOT_WIDTH + 1), Some(Tab::Laws));
        assert_eq!(tab_at_column(3 * TAB_SLOT_WIDTH + 1), None);
    }
}
