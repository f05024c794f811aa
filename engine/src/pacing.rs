//! Run pacing: the shared speed handle and the suspension/cancellation point
//!
//! Every paced primitive ends in `Pacer::suspend`, which sleeps for the
//! current interval and doubles as the cancellation checkpoint. The interval
//! is read fresh on every suspension, so a speed change from the driver takes
//! effect on the very next step of a run already in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::error::{EngineError, EngineResult};
use crate::types::PacingMode;

/// Interval at the slowest slider position.
pub const MAX_DELAY_MS: u64 = 200;
/// Interval at the fastest slider position.
pub const MIN_DELAY_MS: u64 = 20;
/// Interval a fresh engine starts with.
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Map a speed slider position (0 slowest, 100 fastest) onto an interval.
pub fn delay_for_percent(percent: u8) -> Duration {
    let percent = u64::from(percent.min(100));
    Duration::from_millis(MAX_DELAY_MS - percent * (MAX_DELAY_MS - MIN_DELAY_MS) / 100)
}

/// Cloneable handle on the pacing interval, shared between the driver and a
/// running sort. Plain relaxed atomics: readers only ever need the latest
/// value, never an ordering relationship.
#[derive(Debug, Clone)]
pub struct SpeedControl {
    delay_ms: Arc<AtomicU64>,
}

impl SpeedControl {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_ms: Arc::new(AtomicU64::new(delay.as_millis() as u64)),
        }
    }

    /// Current interval, as of this instant.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.load(Ordering::Relaxed))
    }

    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::Relaxed);
    }

    /// Set the interval from a slider position (0 slowest, 100 fastest).
    pub fn set_percent(&self, percent: u8) {
        self.set_delay(delay_for_percent(percent));
    }

    /// Slider position corresponding to the current interval.
    pub fn percent(&self) -> u8 {
        let ms = self.delay_ms.load(Ordering::Relaxed).clamp(MIN_DELAY_MS, MAX_DELAY_MS);
        (((MAX_DELAY_MS - ms) * 100) / (MAX_DELAY_MS - MIN_DELAY_MS)) as u8
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

/// Owns the suspension side of a run: the speed handle, the pacing mode and
/// the cancellation channel.
pub struct Pacer {
    speed: SpeedControl,
    mode: PacingMode,
    cancel_rx: mpsc::Receiver<()>,
}

impl Pacer {
    pub fn new(speed: SpeedControl, mode: PacingMode, cancel_rx: mpsc::Receiver<()>) -> Self {
        Self {
            speed,
            mode,
            cancel_rx,
        }
    }

    /// Suspension point after a comparison. Under `MutationsOnly` this only
    /// polls for cancellation without sleeping, so comparison-heavy passes
    /// stay responsive to a cancel request.
    pub async fn pace_comparison(&mut self) -> EngineResult<()> {
        match self.mode {
            PacingMode::EveryPrimitive => self.suspend().await,
            PacingMode::MutationsOnly => self.poll_cancelled(),
        }
    }

    /// Suspension point after a swap or overwrite. Always sleeps.
    pub async fn pace_mutation(&mut self) -> EngineResult<()> {
        self.suspend().await
    }

    /// Sleep for the current interval, waking early on cancellation.
    async fn suspend(&mut self) -> EngineResult<()> {
        self.poll_cancelled()?;

        let delay = self.speed.delay();
        if delay.is_zero() {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(delay) => Ok(()),
            Some(()) = self.cancel_rx.recv() => Err(EngineError::Cancelled),
        }
    }

    /// Non-blocking cancellation check. A disconnected sender is not a
    /// cancel request: the driver signals disinterest by dropping the event
    /// receiver, which surfaces through the sink instead.
    fn poll_cancelled(&mut self) -> EngineResult<()> {
        match self.cancel_rx.try_recv() {
            Ok(()) => Err(EngineError::Cancelled),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => Ok(()),
        }
    }
}
