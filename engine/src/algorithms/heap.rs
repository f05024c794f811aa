//! Heap sort: bottom-up max-heap build, then repeated root extraction

use std::cmp::Ordering;

use crate::error::EngineResult;
use crate::sequence::SequenceState;
use crate::traits::StepSink;

pub(super) async fn sort<S: StepSink>(seq: &mut SequenceState<S>) -> EngineResult<()> {
    let n = seq.len();

    for root in (0..n / 2).rev() {
        sift_down(seq, n, root).await?;
    }

    for end in (1..n).rev() {
        seq.swap(0, end).await?;
        seq.mark_sorted(&[end])?;
        sift_down(seq, end, 0).await?;
    }
    seq.mark_sorted(&[0])?;

    Ok(())
}

/// Restore the max-heap property below `root`, considering only the first
/// `n` elements. Strictly-greater comparisons throughout: the parent wins
/// ties against its children and the left child wins ties against the right.
async fn sift_down<S: StepSink>(
    seq: &mut SequenceState<S>,
    n: usize,
    mut root: usize,
) -> EngineResult<()> {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < n && seq.compare(left, largest).await? == Ordering::Greater {
            largest = left;
        }
        if right < n && seq.compare(right, largest).await? == Ordering::Greater {
            largest = right;
        }

        if largest == root {
            return Ok(());
        }

        seq.swap(root, largest).await?;
        root = largest;
    }
}
