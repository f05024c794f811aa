//! Frontend trait definition for dependency injection

use async_trait::async_trait;
use engine::RunEvent;

use crate::error::ViewerResult;

/// A renderer for one sort run.
///
/// The drive loop forwards every event from the run's stream here, terminal
/// event included. The caller finishes the frontend exactly once after the
/// loop returns, error paths included.
#[mockall::automock]
#[async_trait]
pub trait Frontend: Send {
    /// Present one event to the user.
    async fn handle_event(&mut self, event: RunEvent) -> ViewerResult<()>;

    /// Release whatever the frontend holds (screen modes, buffers).
    async fn finish(&mut self) -> ViewerResult<()>;
}
