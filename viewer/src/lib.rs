//! Terminal frontends for the sorting engine.
//!
//! The library half of the viewer: frontends (interactive bars, JSON
//! lines), the trace recorder and the run drivers that connect them to
//! an [`engine::SortRun`]. The binary in `main.rs` is a thin CLI over
//! these pieces.

pub mod app;
pub mod error;
pub mod headless;
pub mod logging;
pub mod render;
pub mod traits;

pub use app::{drive_run, drive_run_interactive};
pub use error::{ViewerError, ViewerResult};
pub use headless::{JsonRenderer, TraceRecorder};
pub use render::{BarModel, BarState, TerminalRenderer};
pub use traits::{Frontend, MockFrontend};
