//! # rs-05-batch-orchestrator
//!
//! Drives the risk engine over every registration once per batch run.
//!
//! ## Contract
//!
//! - The id space is split into disjoint ranges covering it exactly once
//! - Each range is owned by one rayon worker (read → risk pass → write)
//! - Only registrations whose state changed are written back
//! - `processed + skipped == total`: a registration whose read or write
//!   fails is counted as skipped, never dropped silently

pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use config::BatchConfig;
pub use domain::{partition, BatchReport};
pub use error::{BatchError, BatchResult};
pub use service::BatchOrchestrator;
