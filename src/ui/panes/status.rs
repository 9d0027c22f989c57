//! Status bar rendering with keybindings and state indicators

use crate::playback::PlaybackStatus;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub position: usize,
    pub total_steps: usize,
    pub status: Option<PlaybackStatus>,
    pub is_error: bool,
    /// Text typed so far while editing the search target
    pub input: Option<&'a str>,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let step_text = if data.total_steps == 0 {
        " Step -/- ".to_string()
    } else {
        format!(" Step {}/{} ", data.position + 1, data.total_steps)
    };

    let message = match data.input {
        Some(input) => format!(" Target: {}▏", input),
        None => format!(" {} ", data.message),
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else if data.input.is_some() {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            message,
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = if data.input.is_some() {
        &[(" ↵ ", " apply "), (" esc ", " cancel ")]
    } else {
        &[
            (" ←/→ ", " step "),
            (" ⎵ ", " play "),
            (" ↵ / ⌫ ", " end/start "),
            (" +/- ", " speed "),
            (" a ", " algo "),
            (" c ", " category "),
            (" t ", " target "),
            (" g ", " new data "),
            (" r ", " reset "),
            ("q", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    // Show status indicators based on position and state
    let badge = if data.input.is_some() {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else {
        match data.status {
            Some(PlaybackStatus::Playing) => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
            Some(PlaybackStatus::Finished) => Some((" END ", DEFAULT_THEME.error)),
            _ if data.total_steps > 0 && data.position + 1 >= data.total_steps => {
                Some((" END ", DEFAULT_THEME.error))
            }
            Some(_) if data.position == 0 => Some((" START ", DEFAULT_THEME.success)),
            _ => None,
        }
    };

    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
