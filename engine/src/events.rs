//! Animation protocol: the events a running sort emits toward its renderer
//!
//! A renderer that folds these steps into its own bar model, applying one
//! step per frame, reproduces the sort visually without ever touching the
//! sequence itself.

use serde::{Deserialize, Serialize};

/// One observable step of a running sort.
///
/// `Compare`, `Swap` and `Overwrite` are the paced primitives; the `Mark*`
/// variants are display annotations that piggyback on the stream without
/// consuming a pacing interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationStep {
    /// Two positions were ordered against each other. No mutation.
    Compare { i: usize, j: usize },

    /// The values at two positions were exchanged.
    Swap { i: usize, j: usize },

    /// A single cell was assigned a new value.
    Overwrite { index: usize, value: u32 },

    /// Positions the algorithm is currently working on.
    MarkActive { indices: Vec<usize> },

    /// The partition pivot for the current pass.
    MarkPivot { index: usize },

    /// Positions that have reached their final place.
    MarkSorted { indices: Vec<usize> },
}

/// Counters accumulated over one run.
///
/// These describe the emitted trace, not wall-clock performance: `steps`
/// counts every event including annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub writes: u64,
    pub steps: u64,
}

/// Stream element delivered to the driver of a sort run.
///
/// Every stream carries zero or more `Step` events followed by exactly one
/// terminal variant, after which the channel closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEvent {
    /// One animation step to apply to the display.
    Step(AnimationStep),

    /// The algorithm finished; `values` is the final sequence.
    Completed { values: Vec<u32>, stats: RunStats },

    /// The run was cancelled at a suspension point. The sequence is left
    /// partially sorted.
    Cancelled { stats: RunStats },

    /// The run aborted on a defect (for example an out-of-range index).
    Failed { message: String },
}

impl RunEvent {
    /// True for the variants that end a stream.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunEvent::Step(_))
    }
}
