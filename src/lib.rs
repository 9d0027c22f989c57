//! # Introduction
//!
//! algotty runs classic sorting and searching algorithms while recording
//! every comparison, swap, shift and merge as a replayable [`recorder::Step`].
//! The step history is then played back, paused, stepped and scrubbed
//! through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Dataset → Recorder → Steps → Playback → Highlights → TUI
//! ```
//!
//! 1. [`dataset`]: generates the input array from a seeded random source.
//! 2. [`recorder`]: one pure function per algorithm producing a full
//!    snapshot per step, plus the [`recorder::Algorithm`] registry.
//! 3. [`playback`]: the play/pause/step/seek/speed state machine, driven
//!    by an injected [`playback::Clock`].
//! 4. [`highlight`]: maps a step and an index to a highlight category.
//! 5. [`session`]: the [`session::Visualizer`] facade that validates
//!    configuration and owns the active session.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, selection, insertion, merge, quick (Lomuto, last-element
//! pivot). Searching: linear, binary, jump.

pub mod dataset;
pub mod highlight;
pub mod playback;
pub mod recorder;
pub mod session;
pub mod ui;
