//! Insertion sort: lift the key, shift the greater prefix right, place it

use std::cmp::Ordering;

use crate::error::EngineResult;
use crate::sequence::SequenceState;
use crate::traits::StepSink;

/// Shifting stops at the first element not strictly greater than the key,
/// so equal elements are never carried past each other and the sort stays
/// stable. The key travels outside the sequence (via `peek`) and lands with
/// a single overwrite, which fires even when the key never moved.
pub(super) async fn sort<S: StepSink>(seq: &mut SequenceState<S>) -> EngineResult<()> {
    let n = seq.len();

    for i in 1..n {
        let key = seq.peek(i)?;
        let mut hole = i;

        while hole > 0 {
            let shifted = seq.peek(hole - 1)?;
            if seq.compare_values(hole - 1, hole, shifted, key).await? != Ordering::Greater {
                break;
            }
            seq.overwrite(hole, shifted).await?;
            hole -= 1;
        }

        seq.overwrite(hole, key).await?;
    }

    let all: Vec<usize> = (0..n).collect();
    seq.mark_sorted(&all)?;

    Ok(())
}
