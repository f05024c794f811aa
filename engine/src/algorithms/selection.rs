//! Selection sort: scan for the minimum, swap it to the front

use std::cmp::Ordering;

use crate::error::EngineResult;
use crate::sequence::SequenceState;
use crate::traits::StepSink;

/// The scan displaces the candidate minimum only on a strictly greater
/// comparison, so ties keep the earliest occurrence. Every pass ends in one
/// swap even when the element is already in place; the final pass degenerates
/// to a self-swap.
pub(super) async fn sort<S: StepSink>(seq: &mut SequenceState<S>) -> EngineResult<()> {
    let n = seq.len();

    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if seq.compare(min, j).await? == Ordering::Greater {
                min = j;
            }
        }

        seq.swap(i, min).await?;
        seq.mark_sorted(&[i])?;
    }

    Ok(())
}
