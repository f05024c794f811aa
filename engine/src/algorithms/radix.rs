//! Radix sort, least significant digit first, decimal buckets

use crate::error::EngineResult;
use crate::sequence::SequenceState;
use crate::traits::StepSink;

/// One counting pass per decimal place until the maximum runs out of
/// digits. The place value is widened to u64 so the loop terminates past
/// the largest u32 instead of wrapping. Nothing is compared here; the only
/// animated steps are the write-backs, plus the final mark once every
/// element is placed.
pub(super) async fn sort<S: StepSink>(seq: &mut SequenceState<S>) -> EngineResult<()> {
    let n = seq.len();
    let max = seq.snapshot().into_iter().max().unwrap_or(0);

    let mut place: u64 = 1;
    while u64::from(max) / place > 0 {
        counting_pass(seq, place).await?;
        place *= 10;
    }

    let all: Vec<usize> = (0..n).collect();
    seq.mark_sorted(&all)?;

    Ok(())
}

/// Stable counting sort by the digit at `place`. The scatter walks the
/// snapshot backwards so equal digits keep their relative order; only the
/// final write-back into the live sequence is animated.
async fn counting_pass<S: StepSink>(seq: &mut SequenceState<S>, place: u64) -> EngineResult<()> {
    let snapshot = seq.snapshot();
    let mut counts = [0usize; 10];

    for &value in &snapshot {
        counts[digit(value, place)] += 1;
    }
    for d in 1..10 {
        counts[d] += counts[d - 1];
    }

    let mut output = vec![0u32; snapshot.len()];
    for &value in snapshot.iter().rev() {
        let d = digit(value, place);
        counts[d] -= 1;
        output[counts[d]] = value;
    }

    for (index, &value) in output.iter().enumerate() {
        seq.overwrite(index, value).await?;
    }

    Ok(())
}

fn digit(value: u32, place: u64) -> usize {
    ((u64::from(value) / place) % 10) as usize
}
