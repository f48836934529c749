//! # Authentication Errors
//!
//! Every variant is terminal for the request that produced it.

use rs_01_epoch_clock::ClockError;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors that can occur while building or verifying authentication data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong-length buffer, negative epoch or unknown salt
    #[error("Malformed input: {field}: {reason}")]
    MalformedInput { field: &'static str, reason: String },

    /// MAC does not match. Never retried.
    #[error("Invalid MAC")]
    InvalidMac,

    /// Request epoch or time is too far in the past
    #[error("Stale request: epoch delta {epoch_delta}, clock skew {skew_secs}s")]
    StaleRequest { epoch_delta: i64, skew_secs: i64 },

    /// Request epoch or time is too far in the future
    #[error("Future request: epoch delta {epoch_delta}, clock skew {skew_secs}s")]
    FutureRequest { epoch_delta: i64, skew_secs: i64 },

    /// Epoch key absent or unusable
    #[error("EBID decryption failed: {0}")]
    DecryptionFailure(String),

    /// EBID decrypts to another epoch than the one claimed by the request
    #[error("EBID epoch mismatch: request claims {claimed}, EBID holds {decrypted}")]
    EpochMismatch { claimed: i32, decrypted: i32 },

    /// No MAC key is known for the decrypted identity
    #[error("Unknown registration: {0}")]
    UnknownRegistration(String),

    /// Time conversion failed
    #[error("Clock error: {0}")]
    Clock(#[from] ClockError),
}

impl From<CryptoError> for AuthError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKeyLength { .. } | CryptoError::InvalidInput(_) => {
                AuthError::DecryptionFailure(err.to_string())
            }
            CryptoError::InvalidBlockLength { .. } | CryptoError::InvalidMacLength(_) => {
                AuthError::MalformedInput {
                    field: "mac",
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
