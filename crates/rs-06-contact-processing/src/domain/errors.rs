//! Contact processing errors
//!
//! Every variant discards the contact; none is retried.

use rs_01_epoch_clock::ClockError;
use rs_02_authentication::AuthError;
use shared_types::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactError {
    #[error("Contact has no HELLO messages")]
    NoMessages,

    /// Every HELLO failed MAC, time or epoch checks
    #[error("All HELLO messages were rejected")]
    NoValidMessages,

    /// No epoch key around the reception time decrypts the EBID consistently
    #[error("EBID could not be decrypted: {0}")]
    UndecryptableEbid(String),

    #[error("Unknown registration: {0}")]
    UnknownRegistration(String),

    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error("Clock error: {0}")]
    Clock(#[from] ClockError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type ContactResult<T> = Result<T, ContactError>;
