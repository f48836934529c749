//! Error types for status handling

use rs_01_epoch_clock::ClockError;
use rs_02_authentication::{AuthError, RequestType};
use shared_types::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatusError {
    /// Bundle authenticated for another endpoint
    #[error("Expected a {expected} request, got {actual}")]
    WrongRequestType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Missing registration for idA {0}")]
    UnknownRegistration(String),

    /// Status requested again before the throttling window elapsed
    #[error("Status request {elapsed_epochs} epochs after the last one, need {min_epochs}")]
    RequestRateExceeded { elapsed_epochs: i64, min_epochs: u32 },

    #[error("Clock error: {0}")]
    Clock(#[from] ClockError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl StatusError {
    pub(crate) fn wrong_request_type(expected: RequestType, actual: RequestType) -> Self {
        Self::WrongRequestType {
            expected: expected.name(),
            actual: actual.name(),
        }
    }
}

pub type StatusResult<T> = Result<T, StatusError>;
