//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Invalid block length
    #[error("Invalid block length: expected {expected}, got {actual}")]
    InvalidBlockLength {
        /// Expected block length in bytes
        expected: usize,
        /// Actual block length in bytes
        actual: usize,
    },

    /// Requested MAC truncation is not in `1..=32`
    #[error("Invalid MAC length: {0}")]
    InvalidMacLength(usize),

    /// Invalid input for cryptographic operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
