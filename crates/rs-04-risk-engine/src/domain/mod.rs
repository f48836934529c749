//! Domain layer for the risk engine

pub mod outcome;
pub mod pipeline;

pub use outcome::{RetentionReset, RiskOutcome, RiskUpdate};
pub use pipeline::{evaluate_risk, purge_expired, retention_reset};
