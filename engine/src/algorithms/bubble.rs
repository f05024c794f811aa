//! Bubble sort: adjacent compare-and-swap passes

use std::cmp::Ordering;

use crate::error::EngineResult;
use crate::sequence::SequenceState;
use crate::traits::StepSink;

/// After pass `i` the largest element of the unsorted prefix has bubbled to
/// position `n - 1 - i`, which is marked sorted before the next pass starts.
pub(super) async fn sort<S: StepSink>(seq: &mut SequenceState<S>) -> EngineResult<()> {
    let n = seq.len();

    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if seq.compare(j, j + 1).await? == Ordering::Greater {
                seq.swap(j, j + 1).await?;
            }
        }
        seq.mark_sorted(&[n - 1 - i])?;
    }
    seq.mark_sorted(&[0])?;

    Ok(())
}
