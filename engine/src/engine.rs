//! The engine session: sequence ownership, mutual exclusion, run lifecycle
//!
//! One `SortEngine` holds one sequence. `start` moves the values into a
//! spawned run task, which is their sole owner until the run ends; the task
//! hands them back (sorted, partially sorted, or as far as they got) and
//! clears the in-progress gate on its way out, whatever the outcome.

use std::mem;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tracing::{debug, error, info};

use crate::algorithms;
use crate::error::{EngineError, EngineResult};
use crate::events::RunEvent;
use crate::generator;
use crate::pacing::{Pacer, SpeedControl, DEFAULT_DELAY_MS};
use crate::sequence::SequenceState;
use crate::traits::ChannelSink;
use crate::types::{PacingMode, SortAlgorithm, ValueRange};

/// Engine-wide configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Pacing interval a fresh engine starts with.
    pub default_delay: Duration,
    /// Which primitives suspend a run.
    pub pacing: PacingMode,
    /// Bounds for generated values.
    pub value_range: ValueRange,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            pacing: PacingMode::default(),
            value_range: ValueRange::default(),
        }
    }
}

struct EngineState {
    values: Vec<u32>,
    in_progress: bool,
}

/// Owns one sequence and runs at most one sort over it at a time.
pub struct SortEngine {
    state: Arc<RwLock<EngineState>>,
    speed: SpeedControl,
    config: EngineConfig,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(EngineState {
                values: Vec::new(),
                in_progress: false,
            })),
            speed: SpeedControl::new(config.default_delay),
            config,
        }
    }

    /// Shared pacing handle. Changes take effect at the next suspension of
    /// a run already in flight.
    pub fn speed(&self) -> SpeedControl {
        self.speed.clone()
    }

    /// Replace the sequence with freshly generated values. Rejected while a
    /// run holds the sequence.
    pub async fn generate(&self, length: usize) -> EngineResult<Vec<u32>> {
        let mut state = self.state.write().await;
        if state.in_progress {
            return Err(EngineError::ConcurrentRunRejected);
        }

        let values = generator::generate(length, self.config.value_range)?;
        state.values = values.clone();
        debug!("🎲 Generated {length} values");
        Ok(values)
    }

    /// Seeded variant of [`generate`](Self::generate) for reproducible runs.
    pub async fn generate_seeded(&self, length: usize, seed: u64) -> EngineResult<Vec<u32>> {
        let mut state = self.state.write().await;
        if state.in_progress {
            return Err(EngineError::ConcurrentRunRejected);
        }

        let values = generator::generate_seeded(length, self.config.value_range, seed)?;
        state.values = values.clone();
        debug!("🎲 Generated {length} values from seed {seed}");
        Ok(values)
    }

    /// Install an externally produced sequence. Same gate as `generate`.
    pub async fn set_sequence(&self, values: Vec<u32>) -> EngineResult<()> {
        let mut state = self.state.write().await;
        if state.in_progress {
            return Err(EngineError::ConcurrentRunRejected);
        }

        state.values = values;
        Ok(())
    }

    /// The values held between runs. Empty while a run owns them; drivers
    /// track live state through the event stream instead.
    pub async fn sequence(&self) -> Vec<u32> {
        self.state.read().await.values.clone()
    }

    pub async fn is_sorting(&self) -> bool {
        self.state.read().await.in_progress
    }

    /// Start one sort over the held sequence.
    ///
    /// The returned handle is the only way to observe or cancel the run.
    /// Exactly one terminal event ends its stream; afterwards the engine
    /// holds the resulting values again and accepts the next request.
    pub async fn start(&self, algorithm: SortAlgorithm) -> EngineResult<SortRun> {
        let values = {
            let mut state = self.state.write().await;
            if state.in_progress {
                return Err(EngineError::ConcurrentRunRejected);
            }
            state.in_progress = true;
            mem::take(&mut state.values)
        };

        info!("🚀 Starting {} over {} values", algorithm.label(), values.len());

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (cancel_tx, cancel_rx) = mpsc::channel(1);
        let pacer = Pacer::new(self.speed.clone(), self.config.pacing, cancel_rx);

        tokio::spawn(run_task(
            algorithm,
            values,
            event_tx,
            pacer,
            Arc::clone(&self.state),
        ));

        Ok(SortRun {
            algorithm,
            events: event_rx,
            cancel_tx,
        })
    }
}

impl Default for SortEngine {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_task(
    algorithm: SortAlgorithm,
    values: Vec<u32>,
    event_tx: mpsc::UnboundedSender<RunEvent>,
    pacer: Pacer,
    session: Arc<RwLock<EngineState>>,
) {
    let sink = ChannelSink::new(event_tx.clone());
    let mut seq = SequenceState::new(values, sink, pacer);

    let outcome = algorithms::dispatch(algorithm, &mut seq).await;
    let (values, _sink, stats) = seq.into_parts();

    let terminal = match outcome {
        Ok(()) => {
            info!(
                "✅ {} complete: {} comparisons, {} swaps, {} writes",
                algorithm.label(),
                stats.comparisons,
                stats.swaps,
                stats.writes
            );
            RunEvent::Completed {
                values: values.clone(),
                stats,
            }
        }
        Err(EngineError::Cancelled) => {
            info!("🛑 {} cancelled after {} steps", algorithm.label(), stats.steps);
            RunEvent::Cancelled { stats }
        }
        Err(err) => {
            error!("❌ {} aborted: {err}", algorithm.label());
            RunEvent::Failed {
                message: err.to_string(),
            }
        }
    };

    // The driver may already be gone; the sequence still has to go back
    let _ = event_tx.send(terminal);

    let mut state = session.write().await;
    state.values = values;
    state.in_progress = false;
}

/// Driver-held handle for one run: the event stream plus cancellation.
///
/// Dropping the handle mid-run closes the event channel, which the run
/// treats as a cancel request at its next emission.
pub struct SortRun {
    algorithm: SortAlgorithm,
    events: mpsc::UnboundedReceiver<RunEvent>,
    cancel_tx: mpsc::Sender<()>,
}

impl SortRun {
    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Next event in program order. `None` once the stream has delivered
    /// its terminal event and closed.
    pub async fn next_event(&mut self) -> Option<RunEvent> {
        self.events.recv().await
    }

    /// Request cancellation. Idempotent; the run unwinds at its next
    /// suspension point and answers with a `Cancelled` event.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.try_send(());
    }

    /// Clone of the cancel channel for external control, e.g. a signal
    /// handler that outlives the borrow on this handle.
    pub fn cancel_sender(&self) -> mpsc::Sender<()> {
        self.cancel_tx.clone()
    }
}
