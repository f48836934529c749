//! # Shared Crypto
//!
//! Primitives consumed by the authentication codec.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `skinny64` | Skinny-64-192 | EBID encryption (8-byte block) |
//! | `mac` | HMAC-SHA256 | Request and HELLO MACs |
//! | `keys` | - | Zeroizing wrappers for epoch and MAC keys |
//!
//! ## Security Properties
//!
//! - MAC comparison is constant-time (`subtle`)
//! - Expanded key schedules and key wrappers are zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod keys;
pub mod mac;
pub mod skinny64;

// Re-exports
pub use errors::CryptoError;
pub use keys::{EpochKey, MacKey};
pub use mac::{constant_time_eq, hmac_sha256, truncated_hmac_sha256, verify_hmac_sha256};
pub use skinny64::Skinny64;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
