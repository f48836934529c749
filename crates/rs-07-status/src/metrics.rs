//! # Status Metrics
//!
//! Prometheus counters, enabled with the `metrics` feature:
//!
//! - `status_requests_total` - status requests, labeled by `result`
//! - `status_alerted_users_total` - at-risk users told for the first time

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref STATUS_REQUESTS: IntCounterVec = register_int_counter_vec!(
        "status_requests_total",
        "Total number of status requests",
        &["result"]
    )
    .expect("Failed to create STATUS_REQUESTS metric");

    pub static ref ALERTED_USERS: IntCounter = register_int_counter!(
        "status_alerted_users_total",
        "Total number of at-risk users notified for the first time"
    )
    .expect("Failed to create ALERTED_USERS metric");
}

/// `result` is one of `none`, `high` or `throttled`.
#[cfg(feature = "metrics")]
pub fn record_status_request(result: &str) {
    STATUS_REQUESTS.with_label_values(&[result]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_alerted_user() {
    ALERTED_USERS.inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_status_request(_result: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_alerted_user() {}
