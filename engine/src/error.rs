//! Engine error types

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Sequence generation was asked for an unusable length. Recoverable:
    /// the caller keeps whatever sequence it had before.
    #[error("invalid sequence length: {requested}")]
    InvalidSequenceLength { requested: usize },

    /// An algorithm addressed a cell outside the sequence. This is a defect
    /// in the algorithm, not a user condition; the run aborts.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A run was requested while another run holds the sequence.
    #[error("a sort run is already in progress")]
    ConcurrentRunRejected,

    /// The run was cancelled at a suspension point. Used internally to
    /// unwind the algorithm; surfaced to drivers as a `Cancelled` event,
    /// never as a failure.
    #[error("sort run cancelled")]
    Cancelled,
}
