//! # Error Types
//!
//! Errors shared across subsystems.

use thiserror::Error;

/// Errors raised by a registration store adapter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Registration not found.
    #[error("Registration not found: {0}")]
    NotFound(String),

    /// A registration with this identity already exists.
    #[error("Registration already exists: {0}")]
    AlreadyExists(String),

    /// Backend unavailable or write rejected.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A value is missing or cannot be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    /// A numeric parameter must be strictly positive.
    #[error("{name} must be strictly positive")]
    NotPositive { name: &'static str },

    /// Risk threshold must be finite and positive.
    #[error("Risk threshold must be finite and > 0, got {0}")]
    InvalidThreshold(f64),
}
