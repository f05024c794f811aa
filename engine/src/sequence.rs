//! Sequence state: the single owner of the values while a sort runs
//!
//! Algorithms never touch the underlying vector. Every read that matters to
//! the animation and every mutation goes through the primitives here, which
//! validate indices, emit the matching `AnimationStep`, keep the run
//! counters, and suspend for one pacing interval. The sink is injected so
//! the same state drives a live channel in production and a recorder in
//! tests.

use std::cmp::Ordering;

use crate::error::{EngineError, EngineResult};
use crate::events::{AnimationStep, RunStats};
use crate::pacing::Pacer;
use crate::traits::StepSink;

pub struct SequenceState<S: StepSink> {
    values: Vec<u32>,
    sink: S,
    pacer: Pacer,
    stats: RunStats,
}

impl<S: StepSink> SequenceState<S> {
    pub fn new(values: Vec<u32>, sink: S, pacer: Pacer) -> Self {
        Self {
            values,
            sink,
            pacer,
            stats: RunStats::default(),
        }
    }

    // ========================================================================
    // Quiet accessors (no events, no suspension)
    // ========================================================================

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read one cell without emitting anything. The legal way for an
    /// algorithm to lift a key or pivot value it will compare against later.
    pub fn peek(&self, index: usize) -> EngineResult<u32> {
        self.values
            .get(index)
            .copied()
            .ok_or(EngineError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Copy of the current values, for algorithms that merge or scatter out
    /// of a stable snapshot.
    pub fn snapshot(&self) -> Vec<u32> {
        self.values.clone()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Tear down into the final values, the sink, and the run counters.
    pub fn into_parts(self) -> (Vec<u32>, S, RunStats) {
        (self.values, self.sink, self.stats)
    }

    // ========================================================================
    // Paced primitives
    // ========================================================================

    /// Order the cells at `i` and `j` against each other.
    ///
    /// Emits `Compare { i, j }` and suspends (pacing mode permitting) before
    /// returning, so the driver sees the comparison while it is happening,
    /// not after the fact.
    pub async fn compare(&mut self, i: usize, j: usize) -> EngineResult<Ordering> {
        let a = self.peek(i)?;
        let b = self.peek(j)?;
        self.emit(AnimationStep::Compare { i, j })?;
        self.stats.comparisons += 1;
        self.pacer.pace_comparison().await?;
        Ok(a.cmp(&b))
    }

    /// Order two caller-held values while attributing them to the positions
    /// `i` and `j` for display. Used where an algorithm compares against a
    /// lifted key or pivot rather than a live cell.
    pub async fn compare_values(
        &mut self,
        i: usize,
        j: usize,
        a: u32,
        b: u32,
    ) -> EngineResult<Ordering> {
        self.check(i)?;
        self.check(j)?;
        self.emit(AnimationStep::Compare { i, j })?;
        self.stats.comparisons += 1;
        self.pacer.pace_comparison().await?;
        Ok(a.cmp(&b))
    }

    /// Exchange the cells at `i` and `j`. Emits `Swap { i, j }` and suspends.
    pub async fn swap(&mut self, i: usize, j: usize) -> EngineResult<()> {
        self.check(i)?;
        self.check(j)?;
        self.values.swap(i, j);
        self.emit(AnimationStep::Swap { i, j })?;
        self.stats.swaps += 1;
        self.pacer.pace_mutation().await
    }

    /// Assign `value` to the cell at `index`. Emits `Overwrite` and suspends.
    pub async fn overwrite(&mut self, index: usize, value: u32) -> EngineResult<()> {
        self.check(index)?;
        self.values[index] = value;
        self.emit(AnimationStep::Overwrite { index, value })?;
        self.stats.writes += 1;
        self.pacer.pace_mutation().await
    }

    // ========================================================================
    // Annotations (no mutation, no suspension)
    // ========================================================================

    /// Mark positions as finally placed. Best-effort: an empty slice or any
    /// out-of-range index turns the whole call into a no-op rather than an
    /// error. The only failure is a closed sink, which means cancellation.
    pub fn mark_sorted(&mut self, indices: &[usize]) -> EngineResult<()> {
        if indices.is_empty() || !indices.iter().all(|&i| i < self.values.len()) {
            return Ok(());
        }
        self.emit(AnimationStep::MarkSorted {
            indices: indices.to_vec(),
        })
    }

    /// Highlight the positions the algorithm is working on. Same best-effort
    /// contract as `mark_sorted`.
    pub fn mark_active(&mut self, indices: &[usize]) -> EngineResult<()> {
        if indices.is_empty() || !indices.iter().all(|&i| i < self.values.len()) {
            return Ok(());
        }
        self.emit(AnimationStep::MarkActive {
            indices: indices.to_vec(),
        })
    }

    /// Highlight the current partition pivot. Same best-effort contract.
    pub fn mark_pivot(&mut self, index: usize) -> EngineResult<()> {
        if index >= self.values.len() {
            return Ok(());
        }
        self.emit(AnimationStep::MarkPivot { index })
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn check(&self, index: usize) -> EngineResult<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(EngineError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
        }
    }

    fn emit(&mut self, step: AnimationStep) -> EngineResult<()> {
        self.sink.emit(step)?;
        self.stats.steps += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::SpeedControl;
    use crate::traits::{MockStepSink, RecordingSink};
    use crate::types::PacingMode;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn zero_delay_pacer() -> Pacer {
        let (_cancel_tx, cancel_rx) = mpsc::channel(1);
        Pacer::new(
            SpeedControl::new(Duration::ZERO),
            PacingMode::EveryPrimitive,
            cancel_rx,
        )
    }

    fn recording_state(values: Vec<u32>) -> SequenceState<RecordingSink> {
        SequenceState::new(values, RecordingSink::new(), zero_delay_pacer())
    }

    #[tokio::test]
    async fn test_compare_orders_cells_and_emits() {
        let mut seq = recording_state(vec![5, 3]);

        assert_eq!(seq.compare(0, 1).await, Ok(Ordering::Greater));
        assert_eq!(seq.compare(1, 0).await, Ok(Ordering::Less));
        assert_eq!(seq.compare(0, 0).await, Ok(Ordering::Equal));

        let (values, sink, stats) = seq.into_parts();
        assert_eq!(values, vec![5, 3]);
        assert_eq!(
            sink.steps()[0],
            AnimationStep::Compare { i: 0, j: 1 }
        );
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.steps, 3);
    }

    #[tokio::test]
    async fn test_out_of_range_compare_is_a_defect() {
        let mut seq = recording_state(vec![1, 2, 3]);

        assert_eq!(
            seq.compare(0, 3).await,
            Err(EngineError::IndexOutOfRange { index: 3, len: 3 })
        );
        // Nothing was emitted for the failed primitive
        let (_, sink, stats) = seq.into_parts();
        assert!(sink.steps().is_empty());
        assert_eq!(stats.comparisons, 0);
    }

    #[tokio::test]
    async fn test_swap_exchanges_cells() {
        let mut seq = recording_state(vec![1, 2]);

        seq.swap(0, 1).await.unwrap();

        let (values, sink, stats) = seq.into_parts();
        assert_eq!(values, vec![2, 1]);
        assert_eq!(sink.steps(), &[AnimationStep::Swap { i: 0, j: 1 }]);
        assert_eq!(stats.swaps, 1);
    }

    #[tokio::test]
    async fn test_overwrite_assigns_one_cell() {
        let mut seq = recording_state(vec![7, 7, 7]);

        seq.overwrite(1, 42).await.unwrap();
        assert_eq!(
            seq.overwrite(3, 1).await,
            Err(EngineError::IndexOutOfRange { index: 3, len: 3 })
        );

        let (values, sink, stats) = seq.into_parts();
        assert_eq!(values, vec![7, 42, 7]);
        assert_eq!(
            sink.steps(),
            &[AnimationStep::Overwrite { index: 1, value: 42 }]
        );
        assert_eq!(stats.writes, 1);
    }

    #[tokio::test]
    async fn test_peek_and_snapshot_emit_nothing() {
        let mut seq = recording_state(vec![10, 20, 30]);

        assert_eq!(seq.peek(2), Ok(30));
        assert_eq!(seq.snapshot(), vec![10, 20, 30]);
        assert_eq!(
            seq.peek(9),
            Err(EngineError::IndexOutOfRange { index: 9, len: 3 })
        );

        seq.mark_sorted(&[0]).unwrap();
        let (_, sink, stats) = seq.into_parts();
        assert_eq!(sink.steps().len(), 1, "only the mark reached the sink");
        assert_eq!(stats.steps, 1);
    }

    #[tokio::test]
    async fn test_annotations_with_bad_indices_are_no_ops() {
        let mut seq = recording_state(vec![1, 2, 3]);

        seq.mark_sorted(&[0, 3]).unwrap();
        seq.mark_active(&[]).unwrap();
        seq.mark_pivot(5).unwrap();
        seq.mark_sorted(&[2, 0]).unwrap();

        let (_, sink, stats) = seq.into_parts();
        assert_eq!(
            sink.steps(),
            &[AnimationStep::MarkSorted { indices: vec![2, 0] }]
        );
        assert_eq!(stats.steps, 1);
    }

    #[tokio::test]
    async fn test_compare_values_reports_display_positions() {
        let mut seq = recording_state(vec![4, 9, 2]);

        let ordering = seq.compare_values(2, 1, 17, 6).await.unwrap();
        assert_eq!(ordering, Ordering::Greater);

        let (_, sink, _) = seq.into_parts();
        assert_eq!(sink.steps(), &[AnimationStep::Compare { i: 2, j: 1 }]);
    }

    #[tokio::test]
    async fn test_sink_failure_unwinds_the_primitive() {
        let mut sink = MockStepSink::new();
        sink.expect_emit().returning(|_| Err(EngineError::Cancelled));

        let mut seq = SequenceState::new(vec![2, 1], sink, zero_delay_pacer());
        assert_eq!(seq.swap(0, 1).await, Err(EngineError::Cancelled));
        // A step that never reached anyone is not counted
        assert_eq!(seq.stats().steps, 0);
        assert_eq!(seq.stats().swaps, 0);
    }
}
