//! Quick sort with Lomuto partitioning, pivot at the high end

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

/// Boxed recursion: async fns cannot recurse directly. Only non-empty
/// sub-ranges are entered, so `low == high` is the sole base case and every
/// index ends up marked exactly once, either as a placed pivot or as a
/// single-element range.
fn sort_range<'a, S: StepSink + 'a>(
    seq: &'a mut SequenceState<S>,
    low: usize,
    high: usize,
) -> Pin<Box<dyn Future<Output = EngineResult<()>> + Send + 'a>> {
    Box::pin(async move {
        if low == high {
            seq.mark_sorted(&[low])?;
            return Ok(());
        }

        let p = partition(seq, low, high).await?;
        if p > low {
            sort_range(seq, low, p - 1).await?;
        }
        if p < high {
            sort_range(seq, p + 1, high).await?;
        }
        Ok(())
    })
}

/// Lomuto partition around the value at `high`. Elements strictly less than
/// the pivot move left of the boundary; pivot-equal elements stay right of
/// it, which keeps the all-equal case shrinking by one placed pivot per
/// level instead of recursing forever.
async fn partition<S: StepSink>(
    seq: &mut SequenceState<S>,
    low: usize,
    high: usize,
) -> EngineResult<usize> {
    let pivot = seq.peek(high)?;
    seq.mark_pivot(high)?;

    let mut boundary = low;
    for j in low..high {
        let candidate = seq.peek(j)?;
        if seq.compare_values(j, high, candidate, pivot).await? == Ordering::Less {
            seq.swap(boundary, j).await?;
            boundary += 1;
        }
    }

    seq.swap(boundary, high).await?;
    seq.mark_sorted(&[boundary])?;
    Ok(boundary)
}
