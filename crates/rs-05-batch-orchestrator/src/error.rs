//! Error types for the batch orchestrator

use shared_types::{ConfigError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Invalid batch configuration: {0}")]
    Config(#[from] ConfigError),

    /// The store could not size a worker's range.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(String),
}

pub type BatchResult<T> = Result<T, BatchError>;
