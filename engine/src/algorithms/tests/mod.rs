//! Algorithm behavior tests
//!
//! Everything runs through `dispatch` over a recording sink at zero delay,
//! so assertions see exactly the step stream a renderer would.

pub mod properties;

use tokio::sync::mpsc;

use crate::algorithms::dispatch;
use crate::events::{AnimationStep, RunStats};
use crate::pacing::{Pacer, SpeedControl};
use crate::sequence::SequenceState;
use crate::traits::RecordingSink;
use crate::types::{PacingMode, SortAlgorithm};
use std::time::Duration;

/// Run one algorithm over `values` and hand back the final values, the full
/// step trace, and the counters.
pub async fn run_recorded(
    algorithm: SortAlgorithm,
    values: Vec<u32>,
) -> (Vec<u32>, Vec<AnimationStep>, RunStats) {
    let (_cancel_tx, cancel_rx) = mpsc::channel(1);
    let pacer = Pacer::new(
        SpeedControl::new(Duration::ZERO),
        PacingMode::EveryPrimitive,
        cancel_rx,
    );
    let mut seq = SequenceState::new(values, RecordingSink::new(), pacer);

    dispatch(algorithm, &mut seq)
        .await
        .expect("algorithm run should succeed");

    let (values, sink, stats) = seq.into_parts();
    (values, sink.into_steps(), stats)
}

/// Indices a trace has marked sorted, with multiplicity.
pub fn sorted_marks(steps: &[AnimationStep]) -> Vec<usize> {
    steps
        .iter()
        .filter_map(|step| match step {
            AnimationStep::MarkSorted { indices } => Some(indices.clone()),
            _ => None,
        })
        .flatten()
        .collect()
}
