//! Sink trait for dependency injection of the step destination

use tokio::sync::mpsc;

use crate::error::{EngineError, EngineResult};
use crate::events::{AnimationStep, RunEvent};

/// Destination for the animation steps a running sort emits.
///
/// The production sink forwards steps onto the run's event channel; tests
/// inject a recording sink instead and assert on the captured trace.
#[mockall::automock]
pub trait StepSink: Send {
    /// Deliver one step to whoever is watching the run.
    ///
    /// Returns `Cancelled` when nobody is: a closed channel means the driver
    /// dropped its handle, and the run unwinds at the next emission.
    fn emit(&mut self, step: AnimationStep) -> EngineResult<()>;
}

/// Production sink: wraps steps into `RunEvent::Step` and forwards them to
/// the driver's event channel.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<RunEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<RunEvent>) -> Self {
        Self { tx }
    }
}

impl StepSink for ChannelSink {
    fn emit(&mut self, step: AnimationStep) -> EngineResult<()> {
        self.tx
            .send(RunEvent::Step(step))
            .map_err(|_| EngineError::Cancelled)
    }
}

/// Test sink that captures every emitted step in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    steps: Vec<AnimationStep>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<AnimationStep> {
        self.steps
    }
}

impl StepSink for RecordingSink {
    fn emit(&mut self, step: AnimationStep) -> EngineResult<()> {
        self.steps.push(step);
        Ok(())
    }
}
