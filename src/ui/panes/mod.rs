//! TUI pane rendering modules
//!
//! Every pane is a stateless render function that draws from a
//! [`FrameView`](crate::session::FrameView) or static algorithm data.
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart, one highlight color per element
//! - [`info`]: algorithm card, counters and the color legend
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use info::{render_algorithm_pane, render_legend_pane, render_stats_pane};
pub use status::{render_status_bar, StatusRenderData};
