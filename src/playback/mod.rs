//! Playback over a recorded step sequence
//!
//! [`PlaybackController`] is a small state machine:
//!
//! ```text
//!            start                 tick at last index
//!   Idle ───────────▶ Playing ───────────────────────▶ Finished
//!    ▲   ◀── reset ──  │   ▲                               │
//!    │           pause │   │ start            step back / seek
//!    │                 ▼   │                               │
//!    └──── reset ───── Paused ◀────────────────────────────┘
//! ```
//!
//! Auto-advance is a single pending [`Timer`]. Every transition out of
//! `Playing` drops it, and every re-arm bumps a generation counter, so a
//! timer delivered after it was cancelled or replaced no longer matches and
//! is reported as [`TickOutcome::Stale`] without touching the position.

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;
pub const DEFAULT_SPEED: u8 = 50;

/// Shortest delay between two automatic steps
pub const MIN_DELAY: Duration = Duration::from_millis(10);

/// Delay between automatic steps: `1000ms - speed * 9ms`, at least [`MIN_DELAY`]
pub fn delay_for_speed(speed: u8) -> Duration {
    let speed = u64::from(speed.clamp(MIN_SPEED, MAX_SPEED));
    Duration::from_millis(1000u64.saturating_sub(speed * 9)).max(MIN_DELAY)
}

/// Identity of one configured session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing played yet, or rewound by reset
    Idle,
    Playing,
    Paused,
    /// Auto-advance reached the last step
    Finished,
}

impl PlaybackStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackStatus::Idle => "IDLE",
            PlaybackStatus::Playing => "PLAYING",
            PlaybackStatus::Paused => "PAUSED",
            PlaybackStatus::Finished => "FINISHED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub position: usize,
    pub status: PlaybackStatus,
    pub speed: u8,
}

/// A scheduled auto-advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub session: SessionId,
    pub generation: u64,
    pub due: Duration,
}

/// Result of delivering or polling a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Position moved to the contained index
    Advanced(usize),
    /// Reached the end and stopped
    Finished,
    /// A timer is pending but not due yet, or nothing is pending
    Waiting,
    /// The timer was cancelled or belongs to another session
    Stale,
}

#[derive(Debug)]
pub struct PlaybackController {
    session: SessionId,
    len: usize,
    state: PlaybackState,
    pending: Option<Timer>,
    generation: u64,
}

impl PlaybackController {
    /// Controller for a sequence of `len` steps, idle at position 0
    pub fn new(session: SessionId, len: usize, speed: u8) -> Self {
        PlaybackController {
            session,
            len,
            state: PlaybackState {
                position: 0,
                status: PlaybackStatus::Idle,
                speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            },
            pending: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    pub fn speed(&self) -> u8 {
        self.state.speed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn pending(&self) -> Option<Timer> {
        self.pending
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    fn arm(&mut self, now: Duration) {
        self.generation += 1;
        self.pending = Some(Timer {
            session: self.session,
            generation: self.generation,
            due: now + delay_for_speed(self.state.speed),
        });
    }

    fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            trace!(session = %self.session, generation = timer.generation, "timer cancelled");
        }
    }

    /// Begin auto-advance. Returns false when nothing changed.
    pub fn start(&mut self, now: Duration) -> bool {
        match self.state.status {
            PlaybackStatus::Playing | PlaybackStatus::Finished => false,
            PlaybackStatus::Idle | PlaybackStatus::Paused => {
                if self.is_empty() {
                    return false;
                }
                self.state.status = PlaybackStatus::Playing;
                self.arm(now);
                debug!(session = %self.session, position = self.state.position, "playback started");
                true
            }
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state.status != PlaybackStatus::Playing {
            return false;
        }
        self.cancel();
        self.state.status = PlaybackStatus::Paused;
        debug!(session = %self.session, position = self.state.position, "playback paused");
        true
    }

    /// Move one step forward. Playing stays playing; idle becomes paused.
    pub fn step_forward(&mut self) -> bool {
        if self.is_empty() || self.state.position >= self.last_index() {
            return false;
        }
        self.state.position += 1;
        if self.state.status == PlaybackStatus::Idle {
            self.state.status = PlaybackStatus::Paused;
        }
        true
    }

    /// Move one step back. Leaving the end of a finished run pauses it.
    pub fn step_backward(&mut self) -> bool {
        if self.state.position == 0 {
            return false;
        }
        self.state.position -= 1;
        if matches!(
            self.state.status,
            PlaybackStatus::Idle | PlaybackStatus::Finished
        ) {
            self.state.status = PlaybackStatus::Paused;
        }
        true
    }

    /// Jump to `position`, clamped into the sequence
    pub fn seek(&mut self, position: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = position.min(self.last_index());
        let changed = target != self.state.position;
        self.state.position = target;

        match self.state.status {
            PlaybackStatus::Idle if changed => self.state.status = PlaybackStatus::Paused,
            PlaybackStatus::Finished if target < self.last_index() => {
                self.state.status = PlaybackStatus::Paused
            }
            _ => {}
        }
        changed
    }

    /// Back to idle at position 0, cancelling any pending advance
    pub fn reset(&mut self) {
        self.cancel();
        self.state.position = 0;
        self.state.status = PlaybackStatus::Idle;
        debug!(session = %self.session, "playback reset");
    }

    /// Change speed; a pending advance is rescheduled with the new delay
    pub fn set_speed(&mut self, speed: u8, now: Duration) {
        self.state.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        if self.state.status == PlaybackStatus::Playing {
            self.arm(now);
        }
    }

    /// Deliver `timer`. Only the currently pending timer has any effect.
    pub fn fire(&mut self, timer: Timer, now: Duration) -> TickOutcome {
        if self.pending != Some(timer) || self.state.status != PlaybackStatus::Playing {
            trace!(session = %self.session, generation = timer.generation, "stale timer ignored");
            return TickOutcome::Stale;
        }

        if self.state.position < self.last_index() {
            self.state.position += 1;
            self.arm(now);
            trace!(session = %self.session, position = self.state.position, "advanced");
            TickOutcome::Advanced(self.state.position)
        } else {
            self.pending = None;
            self.state.status = PlaybackStatus::Finished;
            debug!(session = %self.session, "playback finished");
            TickOutcome::Finished
        }
    }

    /// Fire the pending timer if it is due at `now`
    pub fn poll(&mut self, now: Duration) -> TickOutcome {
        match self.pending {
            Some(timer) if timer.due <= now => self.fire(timer, now),
            _ => TickOutcome::Waiting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: SessionId = SessionId(1);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_delay_for_speed() {
        assert_eq!(delay_for_speed(1), ms(991));
        assert_eq!(delay_for_speed(50), ms(550));
        assert_eq!(delay_for_speed(100), ms(100));
        assert_eq!(delay_for_speed(0), ms(991));
        assert_eq!(delay_for_speed(255), ms(100));
        assert!(delay_for_speed(100) >= MIN_DELAY);
    }

    #[test]
    fn test_empty_sequence_stays_idle() {
        let mut pc = PlaybackController::new(S, 0, DEFAULT_SPEED);
        assert!(!pc.start(ms(0)));
        assert_eq!(pc.status(), PlaybackStatus::Idle);
        assert!(!pc.step_forward());
        assert!(!pc.seek(3));
        assert_eq!(pc.position(), 0);
    }

    #[test]
    fn test_auto_advance_to_finished() {
        let mut pc = PlaybackController::new(S, 3, 100);
        assert!(pc.start(ms(0)));

        assert_eq!(pc.poll(ms(50)), TickOutcome::Waiting);
        assert_eq!(pc.poll(ms(100)), TickOutcome::Advanced(1));
        assert_eq!(pc.poll(ms(200)), TickOutcome::Advanced(2));
        assert_eq!(pc.poll(ms(300)), TickOutcome::Finished);
        assert_eq!(pc.status(), PlaybackStatus::Finished);
        assert!(pc.pending().is_none());

        // finished ignores start until reset
        assert!(!pc.start(ms(400)));
        pc.reset();
        assert_eq!(pc.position(), 0);
        assert!(pc.start(ms(400)));
    }

    #[test]
    fn test_pause_cancels_pending_timer() {
        let mut pc = PlaybackController::new(S, 5, 100);
        pc.start(ms(0));
        let timer = pc.pending().unwrap();

        assert!(pc.pause());
        assert_eq!(pc.fire(timer, ms(100)), TickOutcome::Stale);
        assert_eq!(pc.position(), 0);
        assert_eq!(pc.poll(ms(10_000)), TickOutcome::Waiting);
    }

    #[test]
    fn test_reset_cancels_pending_timer() {
        let mut pc = PlaybackController::new(S, 5, 100);
        pc.start(ms(0));
        pc.poll(ms(100));
        let timer = pc.pending().unwrap();

        pc.reset();
        assert_eq!(pc.fire(timer, ms(200)), TickOutcome::Stale);
        assert_eq!(pc.position(), 0);
        assert_eq!(pc.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_step_bounds() {
        let mut pc = PlaybackController::new(S, 2, DEFAULT_SPEED);
        assert!(!pc.step_backward());
        assert!(pc.step_forward());
        assert_eq!(pc.status(), PlaybackStatus::Paused);
        assert!(!pc.step_forward());
        assert_eq!(pc.position(), 1);
        assert!(pc.step_backward());
        assert_eq!(pc.position(), 0);
    }

    #[test]
    fn test_step_forward_while_playing_keeps_playing() {
        let mut pc = PlaybackController::new(S, 4, 100);
        pc.start(ms(0));
        assert!(pc.step_forward());
        assert_eq!(pc.status(), PlaybackStatus::Playing);
        assert_eq!(pc.poll(ms(100)), TickOutcome::Advanced(2));
    }

    #[test]
    fn test_speed_change_reschedules() {
        let mut pc = PlaybackController::new(S, 4, 1);
        pc.start(ms(0));
        let slow = pc.pending().unwrap();

        pc.set_speed(100, ms(10));
        assert_eq!(pc.position(), 0);
        assert_eq!(pc.fire(slow, ms(991)), TickOutcome::Stale);
        assert_eq!(pc.poll(ms(110)), TickOutcome::Advanced(1));
    }

    #[test]
    fn test_seek_clamps_and_leaves_finished() {
        let mut pc = PlaybackController::new(S, 3, 100);
        pc.start(ms(0));
        pc.poll(ms(100));
        pc.poll(ms(200));
        pc.poll(ms(300));
        assert_eq!(pc.status(), PlaybackStatus::Finished);

        assert!(!pc.seek(99));
        assert_eq!(pc.status(), PlaybackStatus::Finished);
        assert!(pc.seek(0));
        assert_eq!(pc.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn test_step_back_from_finished_pauses() {
        let mut pc = PlaybackController::new(S, 2, 100);
        pc.start(ms(0));
        pc.poll(ms(100));
        pc.poll(ms(200));
        assert_eq!(pc.status(), PlaybackStatus::Finished);
        assert!(pc.step_backward());
        assert_eq!(pc.status(), PlaybackStatus::Paused);
        assert!(pc.start(ms(300)));
    }
}
