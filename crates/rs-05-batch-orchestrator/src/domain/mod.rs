//! Domain layer for the batch orchestrator

pub mod partition;
pub mod report;

pub use partition::partition;
pub use report::BatchReport;
