//! Array pane: one bar per element, colored by its highlight
//!
//! The bar width shrinks with the number of elements so a full dataset
//! always fits; values are printed inside the bars when there is room.
//! The caption of the current step is shown underneath.

use crate::session::FrameView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width and gap that fit `count` bars into `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let width = usize::from(width);
    let gap = if width >= count.saturating_mul(3) { 1 } else { 0 };
    let bar_width = (width.saturating_sub(gap * count) / count).clamp(1, 9);
    // both values are at most 9
    (bar_width as u16, gap as u16)
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, view: Option<&FrameView>, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let Some(view) = view else {
        let paragraph = Paragraph::new("(no algorithm configured)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let (bar_width, bar_gap) = bar_geometry(rows[0].width, view.array.len());
    let show_values = bar_width >= 2;

    let bars: Vec<Bar> = view
        .array
        .iter()
        .zip(&view.highlights)
        .enumerate()
        .map(|(i, (&value, &highlight))| {
            let color = DEFAULT_THEME.highlight(highlight);
            let bar = Bar::default()
                .value(value.max(0) as u64)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color));
            if show_values {
                bar.text_value(value.to_string())
                    .label(Line::from(i.to_string()))
            } else {
                bar.text_value(String::new())
            }
        })
        .collect();

    let max = view.array.iter().copied().max().unwrap_or(0).max(1) as u64;
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max)
        .label_style(Style::default().fg(DEFAULT_THEME.comment));
    frame.render_widget(chart, rows[0]);

    let caption = Paragraph::new(view.message.as_str())
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: true });
    frame.render_widget(caption, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry_fits() {
        let (w, g) = bar_geometry(100, 15);
        assert!(w * 15 + g * 15 <= 100);
        assert_eq!(g, 1);

        let (w, g) = bar_geometry(60, 50);
        assert_eq!((w, g), (1, 0));

        assert_eq!(bar_geometry(10, 0), (1, 0));
    }

    #[test]
    fn test_bar_geometry_huge_counts() {
        assert_eq!(bar_geometry(120, 30_000), (1, 0));
        assert_eq!(bar_geometry(u16::MAX, usize::MAX), (1, 0));
    }
}
