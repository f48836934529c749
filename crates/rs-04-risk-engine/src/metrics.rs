//! # Risk Engine Metrics
//!
//! Prometheus counters, enabled with the `metrics` feature:
//!
//! - `risk_raised_total` - registrations newly flagged at risk
//! - `risk_reset_total` - retention resets, labeled by `notified`
//! - `risk_missed_notifications_total` - resets of never-notified users
//! - `risk_expositions_purged_total` - expositions dropped by the purge

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref RISK_RAISED: IntCounter = register_int_counter!(
        "risk_raised_total",
        "Total number of registrations flagged at risk"
    )
    .expect("Failed to create RISK_RAISED metric");

    pub static ref RISK_RESET: IntCounterVec = register_int_counter_vec!(
        "risk_reset_total",
        "Total number of retention resets",
        &["notified"]
    )
    .expect("Failed to create RISK_RESET metric");

    pub static ref MISSED_NOTIFICATIONS: IntCounter = register_int_counter!(
        "risk_missed_notifications_total",
        "Total number of risks that expired before the user was notified"
    )
    .expect("Failed to create MISSED_NOTIFICATIONS metric");

    pub static ref EXPOSITIONS_PURGED: IntCounter = register_int_counter!(
        "risk_expositions_purged_total",
        "Total number of expositions older than the contagious period"
    )
    .expect("Failed to create EXPOSITIONS_PURGED metric");
}

#[cfg(feature = "metrics")]
pub fn record_risk_raised() {
    RISK_RAISED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_risk_reset(notified: bool) {
    RISK_RESET
        .with_label_values(&[if notified { "true" } else { "false" }])
        .inc();
}

#[cfg(feature = "metrics")]
pub fn record_missed_notification() {
    MISSED_NOTIFICATIONS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_expositions_purged(count: usize) {
    EXPOSITIONS_PURGED.inc_by(count as u64);
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_risk_raised() {}

#[cfg(not(feature = "metrics"))]
pub fn record_risk_reset(_notified: bool) {}

#[cfg(not(feature = "metrics"))]
pub fn record_missed_notification() {}

#[cfg(not(feature = "metrics"))]
pub fn record_expositions_purged(_count: usize) {}
