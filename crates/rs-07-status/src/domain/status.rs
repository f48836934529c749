//! Risk status returned to a client and status request throttling

use crate::error::{StatusError, StatusResult};
use rs_01_epoch_clock::EpochInstant;

/// What a client learns from a status request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskStatus {
    /// Not at risk.
    None,
    /// At risk, with the dates the client displays.
    High {
        /// Day of the latest risky contact.
        last_contact_date: EpochInstant,
        /// Start of the most recent epoch that contributed to the risk.
        last_risk_scoring_date: EpochInstant,
        /// Start of the epoch of this status request.
        last_status_request: EpochInstant,
    },
}

impl RiskStatus {
    pub fn is_high(&self) -> bool {
        matches!(self, RiskStatus::High { .. })
    }
}

/// Reject a status request made less than `min_epochs` whole epochs away
/// from the previous one, in either direction.
pub fn check_throttling(
    previous: &EpochInstant,
    now: &EpochInstant,
    min_epochs: u32,
) -> StatusResult<()> {
    let elapsed_epochs = previous.epochs_between(now).abs();
    if elapsed_epochs < i64::from(min_epochs) {
        return Err(StatusError::RequestRateExceeded {
            elapsed_epochs,
            min_epochs,
        });
    }
    Ok(())
}
