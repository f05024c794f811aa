//! Viewer error types

use thiserror::Error;

/// Result type for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;

/// Viewer error types
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("engine error: {0}")]
    Engine(#[from] engine::EngineError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("run failed: {message}")]
    RunFailed { message: String },

    /// The run's event channel closed without delivering a terminal event.
    /// Should not happen with a healthy engine.
    #[error("the run ended without a terminal event")]
    StreamEnded,
}

impl ViewerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
