//! The seven animated sorting procedures
//!
//! Each algorithm is written purely in terms of the `SequenceState`
//! primitives plus ordinary control flow, so the emitted step stream is the
//! complete record of what it did. `dispatch` is the single entry point;
//! nothing here knows about channels, tasks, or rendering.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

#[cfg(test)]
mod tests;

use crate::error::EngineResult;
use crate::sequence::SequenceState;
use crate::traits::StepSink;
use crate::types::SortAlgorithm;

/// Run one algorithm to completion over the given state.
///
/// Sequences of length 0 or 1 are already sorted: the run completes
/// immediately without emitting a single event, final marks included.
pub async fn dispatch<S: StepSink>(
    algorithm: SortAlgorithm,
    seq: &mut SequenceState<S>,
) -> EngineResult<()> {
    if seq.len() <= 1 {
        return Ok(());
    }

    match algorithm {
        SortAlgorithm::Bubble => bubble::sort(seq).await,
        SortAlgorithm::Insertion => insertion::sort(seq).await,
        SortAlgorithm::Selection => selection::sort(seq).await,
        SortAlgorithm::Quick => quick::sort(seq).await,
        SortAlgorithm::Merge => merge::sort(seq).await,
        SortAlgorithm::Heap => heap::sort(seq).await,
        SortAlgorithm::Radix => radix::sort(seq).await,
    }
}
