//! Domain layer for status handling

pub mod status;

pub use status::{check_throttling, RiskStatus};
