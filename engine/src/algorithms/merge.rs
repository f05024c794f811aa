//! Merge sort: recursive halves merged out of stable snapshots

use std::cmp::Ordering;
use std::future::Future;
use std::pin::Pin;

use crate::error::EngineResult;
use crate::sequence::SequenceState;
use crate::traits::StepSink;

pub(super) async fn sort<S: StepSink>(seq: &mut SequenceState<S>) -> EngineResult<()> {
    let n = seq.len();
    sort_range(seq, 0, n - 1).await
}

fn sort_range<'a, S: StepSink + 'a>(
    seq: &'a mut SequenceState<S>,
    left: usize,
    right: usize,
) -> Pin<Box<dyn Future<Output = EngineResult<()>> + Send + 'a>> {
    Box::pin(async move {
        if left >= right {
            return Ok(());
        }

        let mid = (left + right) / 2;
        sort_range(seq, left, mid).await?;
        sort_range(seq, mid + 1, right).await?;
        merge(seq, left, mid, right).await
    })
}

/// Merge `[left..=mid]` and `[mid+1..=right]` in place, reading from copies
/// taken before the first overwrite. A tie takes the left head, so elements
/// from the left half never jump over equal elements from the right half
/// and the sort is stable. The comparison is attributed to the original
/// positions of the two heads; the write target is flagged active just
/// before each merged element lands.
async fn merge<S: StepSink>(
    seq: &mut SequenceState<S>,
    left: usize,
    mid: usize,
    right: usize,
) -> EngineResult<()> {
    let snapshot = seq.snapshot();
    let left_half = snapshot[left..=mid].to_vec();
    let right_half = snapshot[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_half.len() && j < right_half.len() {
        seq.mark_active(&[k])?;
        let ordering = seq
            .compare_values(left + i, mid + 1 + j, left_half[i], right_half[j])
            .await?;

        if ordering != Ordering::Greater {
            seq.overwrite(k, left_half[i]).await?;
            i += 1;
        } else {
            seq.overwrite(k, right_half[j]).await?;
            j += 1;
        }
        k += 1;
    }

    while i < left_half.len() {
        seq.overwrite(k, left_half[i]).await?;
        i += 1;
        k += 1;
    }
    while j < right_half.len() {
        seq.overwrite(k, right_half[j]).await?;
        j += 1;
        k += 1;
    }

    let merged: Vec<usize> = (left..=right).collect();
    seq.mark_sorted(&merged)?;
    Ok(())
}
