//! Side panes: algorithm card, run statistics and color legend

use crate::highlight::Highlight;
use crate::playback::delay_for_speed;
use crate::recorder::Algorithm;
use crate::session::FrameView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0))
}

fn labeled<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the algorithm description and complexity table
pub fn render_algorithm_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    target: Option<i32>,
) {
    let info = algorithm.info();
    let mut lines = vec![
        Line::from(Span::styled(
            algorithm.name(),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
        labeled("Best", info.best.to_string()),
        labeled("Average", info.average.to_string()),
        labeled("Worst", info.worst.to_string()),
        labeled("Space", info.space.to_string()),
    ];

    if let Some(target) = target {
        lines.push(Line::default());
        lines.push(labeled("Target", target.to_string()));
    }

    let paragraph = Paragraph::new(lines)
        .block(pane_block(" Algorithm "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render counters and playback state for the current frame
pub fn render_stats_pane(frame: &mut Frame, area: Rect, view: Option<&FrameView>, speed: u8) {
    let block = pane_block(" Statistics ");

    let Some(view) = view else {
        let paragraph = Paragraph::new("(no steps)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = vec![
        labeled(
            "Step",
            format!("{} / {}", view.position + 1, view.total_steps),
        ),
        labeled("Comparisons", view.comparisons.to_string()),
        labeled("Operations", view.operations.to_string()),
        labeled(
            "Speed",
            format!("{}% ({} ms)", speed, delay_for_speed(speed).as_millis()),
        ),
        labeled("State", view.status.label().to_string()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

const LEGEND: [(Highlight, &str); 8] = [
    (Highlight::Sorted, "sorted / found"),
    (Highlight::Comparing, "comparing / searching"),
    (Highlight::Eliminated, "eliminated"),
    (Highlight::Swapping, "swapping / shifting"),
    (Highlight::Pivot, "pivot"),
    (Highlight::Current, "current"),
    (Highlight::Range, "active range / merged"),
    (Highlight::Default, "unvisited"),
];

/// Render the color legend
pub fn render_legend_pane(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = LEGEND
        .iter()
        .map(|&(highlight, text)| {
            Line::from(vec![
                Span::styled(
                    "██ ",
                    Style::default().fg(DEFAULT_THEME.highlight(highlight)),
                ),
                Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(pane_block(" Legend ")), area);
}
