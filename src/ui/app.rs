//! Main TUI application state and logic

use crate::playback::{PlaybackStatus, TickOutcome};
use crate::recorder::{Algorithm, Category};
use crate::session::{FrameView, Visualizer};
use crate::ui::panes::{self, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Speed change per `+` / `-` press
const SPEED_STEP: u8 = 10;

/// How long to wait for a key before polling the playback timer again
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// The main application state
pub struct App {
    /// The visualizer driving every frame
    pub visualizer: Visualizer,

    /// Algorithm selected in the UI (may differ from the active session
    /// while a search target is still being entered)
    pub algorithm: Algorithm,

    /// Search target as typed
    pub target_input: String,

    /// Whether keystrokes go to the target input
    pub editing_target: bool,

    /// Algorithm and target text to restore if the edit is abandoned
    saved_selection: Option<(Algorithm, String)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejected action
    pub is_error: bool,
}

impl App {
    /// Create a new app and configure the initial algorithm
    pub fn new(visualizer: Visualizer, algorithm: Algorithm, target: Option<i32>) -> Self {
        let mut app = App {
            visualizer,
            algorithm,
            target_input: target.map(|t| t.to_string()).unwrap_or_default(),
            editing_target: false,
            saved_selection: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_error: false,
        };
        app.apply_selection();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.visualizer.tick() == TickOutcome::Finished {
                self.set_status("Playback complete");
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let view = self.visualizer.frame();

        // Main area plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Bars on the left, information column on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(9),
                Constraint::Length(7),
                Constraint::Length(10),
            ])
            .split(columns[1]);

        let session_algorithm = self
            .visualizer
            .session()
            .map(|s| s.algorithm())
            .unwrap_or(self.algorithm);
        let title = format!(
            "{} · {}",
            session_algorithm.name(),
            session_algorithm.category()
        );

        panes::render_bars_pane(frame, columns[0], view.as_ref(), &title);
        panes::render_algorithm_pane(
            frame,
            side[0],
            session_algorithm,
            self.visualizer.session().and_then(|s| s.target()),
        );
        panes::render_stats_pane(frame, side[1], view.as_ref(), self.visualizer.speed());
        panes::render_legend_pane(frame, side[2]);

        let status = StatusRenderData {
            message: &self.status_message,
            position: view.as_ref().map_or(0, |v| v.position),
            total_steps: view.as_ref().map_or(0, |v| v.total_steps),
            status: view.as_ref().map(|v: &FrameView| v.status),
            is_error: self.is_error,
            input: self
                .editing_target
                .then_some(self.target_input.as_str()),
        };
        panes::render_status_bar(frame, main_chunks[1], &status);
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = true;
    }

    fn status(&self) -> Option<PlaybackStatus> {
        self.visualizer.session().map(|s| s.state().status)
    }

    /// Configure the visualizer for the selected algorithm and target.
    /// Returns false when the selection was rejected.
    fn apply_selection(&mut self) -> bool {
        let target = match self.algorithm.category() {
            Category::Searching => Some(self.target_input.as_str()),
            Category::Sorting => None,
        };

        let result = self
            .visualizer
            .configure(
                self.algorithm.category().id(),
                self.algorithm.id(),
                None,
                target,
            )
            .map(|session| session.steps().len());

        match result {
            Ok(steps) => {
                self.set_status(format!("{} ready, {} steps", self.algorithm, steps));
                true
            }
            Err(err) => {
                self.set_error(err.to_string());
                false
            }
        }
    }

    /// Switch to target input, remembering what to go back to
    fn begin_target_edit(&mut self, previous: Algorithm) {
        self.saved_selection = Some((previous, self.target_input.clone()));
        self.editing_target = true;
    }

    fn restore_selection(&mut self) {
        if let Some((algorithm, input)) = self.saved_selection.take() {
            self.algorithm = algorithm;
            self.target_input = input;
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing_target {
            self.handle_target_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.visualizer.pause();
                let n = c.to_digit(10).unwrap_or(1);
                let stepped = (0..n).take_while(|_| self.visualizer.step_forward()).count();
                self.set_status(format!("Stepped forward {} step(s)", stepped));
            }
            KeyCode::Left => {
                self.visualizer.pause();
                if self.visualizer.step_backward() {
                    self.set_status("Stepped backward");
                } else {
                    self.set_error("Already at the first step");
                }
            }
            KeyCode::Right => {
                self.visualizer.pause();
                if self.visualizer.step_forward() {
                    self.set_status("Stepped forward");
                } else {
                    self.set_error("Already at the last step");
                }
            }
            KeyCode::Char(' ') => match self.status() {
                Some(PlaybackStatus::Playing) => {
                    self.visualizer.pause();
                    self.set_status("Paused");
                }
                Some(PlaybackStatus::Finished) => {
                    self.set_error("Playback complete, press r to reset");
                }
                _ => {
                    if self.visualizer.start() {
                        self.set_status("Playing...");
                    } else {
                        self.set_error("Nothing to play");
                    }
                }
            },
            KeyCode::Enter => {
                self.visualizer.pause();
                self.visualizer.seek(usize::MAX);
                self.set_status("Jumped to end");
            }
            KeyCode::Backspace => {
                self.visualizer.pause();
                self.visualizer.seek(0);
                self.set_status("Jumped to start");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.visualizer.speed().saturating_add(SPEED_STEP);
                self.visualizer.set_speed(speed);
                self.set_status(format!("Speed {}%", self.visualizer.speed()));
            }
            KeyCode::Char('-') => {
                let speed = self.visualizer.speed().saturating_sub(SPEED_STEP);
                self.visualizer.set_speed(speed);
                self.set_status(format!("Speed {}%", self.visualizer.speed()));
            }
            KeyCode::Char('r') => {
                self.visualizer.reset();
                self.set_status("Reset");
            }
            KeyCode::Char('g') => {
                let len = self.visualizer.regenerate(None).len();
                self.set_status(format!("Generated {} new values", len));
            }
            KeyCode::Char('a') => {
                self.algorithm = self.algorithm.next_in_category();
                self.apply_selection();
            }
            KeyCode::Char('A') => {
                self.algorithm = self.algorithm.prev_in_category();
                self.apply_selection();
            }
            KeyCode::Char('c') => {
                let previous = self.algorithm;
                let category = previous.category().toggle();
                self.algorithm = category.default_algorithm();
                if category == Category::Searching && self.target_input.trim().is_empty() {
                    self.begin_target_edit(previous);
                    self.set_status("Enter a search target");
                } else {
                    self.apply_selection();
                }
            }
            KeyCode::Char('t') => {
                if self.algorithm.category() == Category::Searching {
                    self.begin_target_edit(self.algorithm);
                    self.target_input.clear();
                } else {
                    self.set_error("Sorting algorithms take no target");
                }
            }
            _ => {}
        }
    }

    fn handle_target_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.editing_target = false;
                if self.apply_selection() {
                    self.saved_selection = None;
                } else {
                    // keep the error message, go back to the running selection
                    self.restore_selection();
                }
            }
            KeyCode::Esc => {
                self.editing_target = false;
                self.restore_selection();
                self.set_status("Target unchanged");
            }
            KeyCode::Backspace => {
                self.target_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if self.target_input.len() < 11 {
                    self.target_input.push(c);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::VisualizerConfig;
    use crossterm::event::KeyModifiers;

    fn app(algorithm: Algorithm, target: Option<i32>) -> App {
        let visualizer = Visualizer::new(VisualizerConfig {
            seed: Some(5),
            ..VisualizerConfig::default()
        });
        App::new(visualizer, algorithm, target)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn session_algorithm(app: &App) -> Option<Algorithm> {
        app.visualizer.session().map(|s| s.algorithm())
    }

    #[test]
    fn test_escape_keeps_previous_target() {
        let mut app = app(Algorithm::LinearSearch, Some(42));
        press(&mut app, KeyCode::Char('t'));
        assert!(app.editing_target);
        assert!(app.target_input.is_empty());
        type_text(&mut app, "7");

        press(&mut app, KeyCode::Esc);
        assert!(!app.editing_target);
        assert_eq!(app.target_input, "42");

        // switching algorithm still has a target to search for
        press(&mut app, KeyCode::Char('a'));
        assert!(!app.is_error);
        assert_eq!(session_algorithm(&app), Some(Algorithm::BinarySearch));
        assert_eq!(app.visualizer.session().and_then(|s| s.target()), Some(42));
    }

    #[test]
    fn test_escape_after_category_switch_restores_algorithm() {
        let mut app = app(Algorithm::MergeSort, None);
        press(&mut app, KeyCode::Char('c'));
        assert!(app.editing_target);
        assert_eq!(app.algorithm, Algorithm::LinearSearch);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.algorithm, Algorithm::MergeSort);
        assert_eq!(session_algorithm(&app), Some(Algorithm::MergeSort));
    }

    #[test]
    fn test_enter_applies_new_category() {
        let mut app = app(Algorithm::BubbleSort, None);
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "15");
        press(&mut app, KeyCode::Enter);

        assert!(!app.is_error);
        assert_eq!(app.algorithm, Algorithm::LinearSearch);
        assert_eq!(session_algorithm(&app), Some(Algorithm::LinearSearch));
        assert_eq!(app.visualizer.session().and_then(|s| s.target()), Some(15));
    }

    #[test]
    fn test_rejected_target_rolls_back() {
        let mut app = app(Algorithm::QuickSort, None);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);

        assert!(app.is_error);
        assert_eq!(app.algorithm, Algorithm::QuickSort);
        assert_eq!(session_algorithm(&app), Some(Algorithm::QuickSort));
    }
}
