//! Instrumented sorting engine for algorithm visualization
//!
//! Sorting algorithms here are rewritten to emit an observable stream of
//! animation steps (compare, swap, overwrite, marks) at a driver-controlled
//! pace, decoupled from any rendering technology. A driver generates a
//! sequence, starts one algorithm, and consumes `RunEvent`s until the
//! stream's single terminal event; cancellation and live speed changes act
//! on the run at its next suspension point.

pub mod algorithms;
pub mod engine;
pub mod error;
pub mod events;
pub mod generator;
pub mod pacing;
pub mod sequence;
pub mod traits;
pub mod types;

// Re-export the driver-facing surface
pub use engine::{EngineConfig, SortEngine, SortRun};
pub use error::{EngineError, EngineResult};
pub use events::{AnimationStep, RunEvent, RunStats};
pub use pacing::SpeedControl;
pub use sequence::SequenceState;
pub use traits::{ChannelSink, RecordingSink, StepSink};
pub use types::{Complexity, PacingMode, SortAlgorithm, ValueRange};
