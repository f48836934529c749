//! # Inbound Ports (Driving Ports / API)

use crate::domain::RiskOutcome;
use shared_types::Registration;

/// Risk engine API, driven once per registration per batch pass.
pub trait RiskEngineApi: Send + Sync {
    /// Run purge, evaluation and retention reset on `registration`.
    ///
    /// The registration is fully processed in memory; the caller writes it
    /// back when the outcome is `Updated`.
    fn process(&self, registration: &mut Registration, current_epoch: i32) -> RiskOutcome;
}
