//! # Risk Pass Steps
//!
//! The three steps of a pass, as pure functions over a `Registration`:
//!
//! ```text
//! purge_expired ──► evaluate_risk ──► retention_reset
//! ```
//!
//! Order matters: aggregation only sees what survived the purge, and the
//! reset reads the `latest_risk_epoch` the evaluation may have moved.

use super::outcome::RetentionReset;
use rs_03_exposure_aggregation::ExposureAggregator;
use shared_types::Registration;

/// Drop expositions with `epoch_id < current_epoch - contagious_epochs`, then
/// merge expositions sharing an epoch. Returns how many were dropped.
pub fn purge_expired(
    registration: &mut Registration,
    current_epoch: i32,
    contagious_epochs: i64,
) -> usize {
    let oldest_kept = i64::from(current_epoch) - contagious_epochs;
    let before = registration.exposed_epochs.len();
    registration
        .exposed_epochs
        .retain(|e| i64::from(e.epoch_id) >= oldest_kept);
    let purged = before - registration.exposed_epochs.len();
    registration.merge_duplicate_epochs();
    purged
}

/// Epochs still eligible for scoring.
///
/// Everything at or before `latest_risk_epoch` has already counted towards a
/// risk decision once a registration has been at risk.
fn uncounted_after(registration: &Registration) -> Option<i32> {
    let has_been_at_risk = registration.at_risk || registration.latest_risk_epoch > 0;
    has_been_at_risk.then_some(registration.latest_risk_epoch)
}

/// Aggregate uncounted scores and raise the risk when they reach `threshold`.
///
/// Returns the most recent contributing epoch when the risk was raised.
pub fn evaluate_risk(
    registration: &mut Registration,
    aggregator: &dyn ExposureAggregator,
    threshold: f64,
) -> Option<i32> {
    let counted_up_to = uncounted_after(registration);
    let eligible: Vec<_> = registration
        .exposed_epochs
        .iter()
        .filter(|e| counted_up_to.map_or(true, |last| e.epoch_id > last))
        .collect();

    let scores: Vec<f64> = eligible
        .iter()
        .flat_map(|e| e.scores.iter().copied())
        .collect();
    let total = aggregator.aggregate(&scores);
    if total < threshold {
        return None;
    }

    let latest = eligible
        .iter()
        .filter(|e| !e.scores.is_empty())
        .map(|e| e.epoch_id)
        .max()?;

    registration.at_risk = true;
    registration.latest_risk_epoch = latest;
    Some(latest)
}

/// Clear an at-risk flag once the user has had `retention_epochs` of status
/// requests after the risk. `notified` is left as is.
pub fn retention_reset(
    registration: &mut Registration,
    retention_epochs: i64,
) -> Option<RetentionReset> {
    if !registration.at_risk {
        return None;
    }
    let elapsed = i64::from(registration.last_status_request_epoch)
        - i64::from(registration.latest_risk_epoch);
    if elapsed < retention_epochs {
        return None;
    }
    registration.at_risk = false;
    Some(if registration.notified {
        RetentionReset::AlreadyNotified
    } else {
        RetentionReset::MissedNotification
    })
}
