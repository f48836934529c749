//! # Shared Types Crate
//!
//! Registration model, store port and server configuration shared by the
//! risk engine, the batch orchestrator and the request handlers.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Registration` is defined once here.
//! - **Keyed by identity**: the 5-byte `IdA` doubles as a 40-bit primary key.
//! - **No persistence technology**: `RegistrationStore` is a port; the
//!   in-memory adapter backs tests and single-process deployments.

pub mod config;
pub mod entities;
pub mod errors;
pub mod store;

pub use config::ServerConfig;
pub use entities::*;
pub use errors::*;
pub use store::{IdRange, InMemoryRegistrationStore, RegistrationStore};
