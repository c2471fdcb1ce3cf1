//! Content tabs: environment cards, driving tips, traffic laws.
//!
//! Cards are drawn as plain lines with a left rule so the whole tab can
//! scroll as one list.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::content::{image_caption, ENVIRONMENT_CARDS, LAWS, TIPS};
use crate::ui::state::{AppState, Tab};
use crate::ui::theme::Theme;

use super::helpers::render_scrollbar;

pub fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let color = family_color(state.active_tab, t);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", state.active_tab.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            " ↑↓ PgUp PgDn ",
            Style::default().fg(t.text_muted),
        )))
        .borders(Borders::ALL)
        .border_style(t.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = content_lines(state.active_tab, t, text_width(inner));
    let visible_height = inner.height as usize;
    let total_lines = lines.len();
    let scroll = state
        .content_scroll
        .min(total_lines.saturating_sub(visible_height));

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(scroll)
        .take(visible_height)
        .collect();
    frame.render_widget(Paragraph::new(visible_lines), inner);

    render_scrollbar(frame, inner, total_lines, scroll);
}

/// Largest scroll offset that still fills the content viewport.
pub fn max_scroll(area: Rect, state: &AppState) -> usize {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let total = content_lines(state.active_tab, &state.theme, text_width(inner)).len();
    total.saturating_sub(inner.height as usize)
}

/// Usable text width inside the content block (one column kept for the scrollbar).
fn text_width(inner: Rect) -> usize {
    inner.width.saturating_sub(1) as usize
}

fn family_color(tab: Tab, t: &Theme) -> Color {
    match tab {
        Tab::Environment => t.eco,
        Tab::Tips => t.tip,
        Tab::Laws => t.law,
    }
}

/// All lines of the active tab, before scrolling.
pub fn content_lines(tab: Tab, t: &Theme, width: usize) -> Vec<Line<'static>> {
    let color = family_color(tab, t);
    let wrap_width = width.saturating_sub(4).max(10);
    let mut lines = Vec::new();

    match tab {
        Tab::Environment => {
            for card in ENVIRONMENT_CARDS {
                card_top(&mut lines, card.icon, None, card.title, color);
                ruled_wrapped(&mut lines, card.description, wrap_width, t.text_primary, color);
                image_line(&mut lines, card.image_query, t, color);
                lines.push(ruled(
                    vec![Span::styled(
                        "Lợi ích:",
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )],
                    color,
                ));
                for benefit in card.benefits {
                    check_item(&mut lines, benefit, "  ", wrap_width, t, color, color);
                }
                card_bottom(&mut lines, width, color);
            }
        }
        Tab::Tips => {
            for card in TIPS {
                card_top(&mut lines, card.icon, None, card.title, color);
                ruled_wrapped(&mut lines, card.description, wrap_width, t.text_primary, color);
                image_line(&mut lines, card.image_query, t, color);
                for point in card.points {
                    check_item(&mut lines, point, "", wrap_width, t, t.eco, color);
                }
                card_bottom(&mut lines, width, color);
            }
        }
        Tab::Laws => {
            for law in LAWS {
                card_top(&mut lines, law.icon, Some(("⚠ ", t.penalty)), law.title, color);
                ruled_wrapped(&mut lines, law.description, wrap_width, t.text_primary, color);
                image_line(&mut lines, law.image_query, t, color);
                lines.push(ruled(
                    vec![Span::styled(
                        "Điều luật:",
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )],
                    color,
                ));
                ruled_wrapped(&mut lines, law.regulation, wrap_width, t.text_dim, color);
                if let Some(penalty) = law.penalty {
                    lines.push(ruled(
                        vec![Span::styled(
                            "Hình phạt:",
                            Style::default().fg(t.penalty).add_modifier(Modifier::BOLD),
                        )],
                        color,
                    ));
                    ruled_wrapped(&mut lines, penalty, wrap_width, t.text_dim, color);
                }
                card_bottom(&mut lines, width, color);
            }
        }
    }
    lines
}

fn card_top(
    lines: &mut Vec<Line<'static>>,
    icon: &'static str,
    mark: Option<(&'static str, Color)>,
    title: &'static str,
    color: Color,
) {
    let mut spans = vec![
        Span::styled("╭─ ", Style::default().fg(color)),
        Span::raw(icon),
        Span::raw(" "),
    ];
    if let Some((mark, fg)) = mark {
        spans.push(Span::styled(mark, Style::default().fg(fg).add_modifier(Modifier::BOLD)));
    }
    spans.push(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)));
    lines.push(Line::from(spans));
}

fn card_bottom(lines: &mut Vec<Line<'static>>, width: usize, color: Color) {
    lines.push(Line::from(Span::styled(
        format!("╰{}", "─".repeat(width.saturating_sub(1).min(60))),
        Style::default().fg(color),
    )));
    lines.push(Line::raw(""));
}

/// Prefix a line with the card's left rule.
fn ruled(mut spans: Vec<Span<'static>>, color: Color) -> Line<'static> {
    spans.insert(0, Span::styled("│ ", Style::default().fg(color)));
    Line::from(spans)
}

fn ruled_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    fg: Color,
    rule: Color,
) {
    for chunk in textwrap::wrap(text, width) {
        lines.push(ruled(
            vec![Span::styled(chunk.into_owned(), Style::default().fg(fg))],
            rule,
        ));
    }
}

fn image_line(lines: &mut Vec<Line<'static>>, query: &str, t: &Theme, rule: Color) {
    lines.push(ruled(
        vec![Span::styled(
            format!("▣ {}", image_caption(query)),
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        )],
        rule,
    ));
}

fn check_item(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    indent: &'static str,
    width: usize,
    t: &Theme,
    check: Color,
    rule: Color,
) {
    for (i, chunk) in textwrap::wrap(text, width.saturating_sub(2 + indent.len()))
        .into_iter()
        .enumerate()
    {
        let mark = if i == 0 { "✓ " } else { "  " };
        lines.push(ruled(
            vec![
                Span::raw(indent),
                Span::styled(mark, Style::default().fg(check).add_modifier(Modifier::BOLD)),
                Span::styled(chunk.into_owned(), Style::default().fg(t.text_dim)),
            ],
            rule,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn environment_lists_benefits() {
        let t = Theme::default_dark();
        let lines: Vec<String> = content_lines(Tab::Environment, &t, 60).iter().map(plain).collect();
        assert!(lines.iter().any(|l| l.contains("Giảm khí thải CO2")));
        assert_eq!(lines.iter().filter(|l| l.contains("Lợi ích:")).count(), 4);
        assert!(lines.iter().any(|l| l.contains("✓ Bảo vệ khí hậu toàn cầu")));
    }

    #[test]
    fn tips_list_points_without_benefit_heading() {
        let t = Theme::default_dark();
        let lines: Vec<String> = content_lines(Tab::Tips, &t, 60).iter().map(plain).collect();
        assert!(lines.iter().any(|l| l.contains("Tốc độ phù hợp")));
        assert!(!lines.iter().any(|l| l.contains("Lợi ích:")));
        assert!(lines.iter().any(|l| l.contains("✓ Ngủ đủ trước khi lên đường")));
    }

    #[test]
    fn laws_show_regulation_and_penalty() {
        let t = Theme::default_dark();
        let lines: Vec<String> = content_lines(Tab::Laws, &t, 200).iter().map(plain).collect();
        assert_eq!(lines.iter().filter(|l| l.contains("Điều luật:")).count(), 4);
        assert_eq!(lines.iter().filter(|l| l.contains("Hình phạt:")).count(), 4);
        assert!(lines.iter().any(|l| l.contains("tước giấy phép 1 tháng")));
        assert!(lines.iter().any(|l| l.contains("⚠ Vượt đèn đỏ")));
    }

    #[test]
    fn image_queries_become_captions() {
        let t = Theme::default_dark();
        let lines: Vec<String> = content_lines(Tab::Tips, &t, 80).iter().map(plain).collect();
        assert!(lines.iter().any(|l| l.contains("▣ car inspection checklist")));
    }

    #[test]
    fn narrow_width_wraps_into_more_lines() {
        let t = Theme::default_dark();
        let wide = content_lines(Tab::Laws, &t, 200).len();
        let narrow = content_lines(Tab::Laws, &t, 24).len();
        assert!(narrow > wide);
    }
}
