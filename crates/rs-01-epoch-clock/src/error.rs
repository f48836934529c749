//! Error types for the epoch clock

use thiserror::Error;

/// Epoch clock errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClockError {
    /// Textual epoch instant does not match `<ISO instant>=<epoch>E`
    #[error("Unparsable epoch instant {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// Instant cannot be represented
    #[error("Instant out of range: {0}")]
    OutOfRange(String),
}

/// Result type for clock operations
pub type ClockResult<T> = Result<T, ClockError>;
