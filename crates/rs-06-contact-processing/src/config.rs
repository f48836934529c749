//! Contact processing configuration

use crate::domain::errors::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use shared_types::ServerConfig;

/// Parameters of the RSSI scoring model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// RSSI spread (dB) per number of samples in a window; the last entry
    /// applies to every larger count.
    pub deltas: Vec<f64>,
    /// Samples above this are clamped to it (dBm).
    pub rssi_max: i32,
    /// Reference RSSI at which the risk starts (dBm).
    pub p0: f64,
    /// Softmax coefficient over RSSI samples.
    pub soft_max_a: f64,
    /// Softmax coefficient over per-minute risks.
    pub soft_max_b: f64,
    /// Extra span tolerated beyond one epoch before a contact scores 0.
    pub epoch_tolerance_secs: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            deltas: vec![39.0, 27.0, 23.0, 21.0, 20.0, 15.0],
            rssi_max: -35,
            p0: -66.0,
            soft_max_a: 4.342,
            soft_max_b: 0.2,
            epoch_tolerance_secs: 180,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> ContactResult<()> {
        if self.deltas.is_empty() || self.deltas.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(ContactError::InvalidConfig(
                "deltas must be non-empty and positive".to_string(),
            ));
        }
        for (name, value) in [("soft_max_a", self.soft_max_a), ("soft_max_b", self.soft_max_b)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ContactError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.epoch_tolerance_secs < 0 {
            return Err(ContactError::InvalidConfig(
                "epoch_tolerance_secs must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Max distance between a HELLO's time16 and its reception time.
    pub hello_time_tolerance_secs: u64,
    pub scoring: ScoringConfig,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            hello_time_tolerance_secs: 60,
            scoring: ScoringConfig::default(),
        }
    }
}

impl From<&ServerConfig> for ContactConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            hello_time_tolerance_secs: server.hello_time_tolerance_secs,
            scoring: ScoringConfig::default(),
        }
    }
}
