//! # Server Configuration
//!
//! Deployment parameters consumed by the core. Each subsystem derives its own
//! typed configuration from this struct.
//!
//! ## Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ROBERT_SERVICE_START_DATE` | `2020-06-01` |
//! | `ROBERT_CONTAGIOUS_PERIOD_DAYS` | `14` |
//! | `ROBERT_RISK_THRESHOLD` | `1.0` |
//! | `ROBERT_RETENTION_PERIOD_DAYS` | `7` |
//! | `ROBERT_AGGREGATION` | `sum` |
//! | `ROBERT_MAX_EPOCH_DRIFT` | `1` |
//! | `ROBERT_MAX_CLOCK_SKEW_SECS` | `60` |
//! | `ROBERT_HELLO_TIME_TOLERANCE_SECS` | `60` |
//! | `ROBERT_MIN_EPOCHS_BETWEEN_STATUS` | `2` |
//! | `ROBERT_BATCH_PAGE_SIZE` | `1000` |
//! | `ROBERT_BATCH_WORKERS` | `4` |

use crate::errors::ConfigError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Complete core configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// UTC date at whose midnight epoch 0 starts.
    pub service_start_date: NaiveDate,
    /// Days of exposure history kept for scoring.
    pub contagious_period_days: u32,
    /// Aggregate score at or above which a registration is at risk.
    pub risk_threshold: f64,
    /// Days after which an unrefreshed risk is cleared.
    pub retention_period_days: u32,
    /// Aggregation strategy name.
    pub aggregation: String,
    /// Accepted distance between request epoch and server epoch.
    pub max_epoch_drift: u32,
    /// Accepted distance between request time and server time, in seconds.
    pub max_clock_skew_secs: u64,
    /// Accepted distance between HELLO time16 and reception time, in seconds.
    pub hello_time_tolerance_secs: u64,
    /// Minimum epochs between two accepted status requests.
    pub min_epochs_between_status_requests: u32,
    /// Registrations per batch page.
    pub batch_page_size: usize,
    /// Parallel batch workers.
    pub batch_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            service_start_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap_or(NaiveDate::MIN),
            contagious_period_days: 14,
            risk_threshold: 1.0,
            retention_period_days: 7,
            aggregation: "sum".to_string(),
            max_epoch_drift: 1,
            max_clock_skew_secs: 60,
            hello_time_tolerance_secs: 60,
            min_epochs_between_status_requests: 2,
            batch_page_size: 1000,
            batch_workers: 4,
        }
    }
}

impl ServerConfig {
    /// Load from `ROBERT_*` environment variables.
    ///
    /// Unset variables keep their default; set but unparsable ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            service_start_date: parse_or(&lookup, "ROBERT_SERVICE_START_DATE", defaults.service_start_date)?,
            contagious_period_days: parse_or(&lookup, "ROBERT_CONTAGIOUS_PERIOD_DAYS", defaults.contagious_period_days)?,
            risk_threshold: parse_or(&lookup, "ROBERT_RISK_THRESHOLD", defaults.risk_threshold)?,
            retention_period_days: parse_or(&lookup, "ROBERT_RETENTION_PERIOD_DAYS", defaults.retention_period_days)?,
            aggregation: lookup("ROBERT_AGGREGATION").unwrap_or(defaults.aggregation),
            max_epoch_drift: parse_or(&lookup, "ROBERT_MAX_EPOCH_DRIFT", defaults.max_epoch_drift)?,
            max_clock_skew_secs: parse_or(&lookup, "ROBERT_MAX_CLOCK_SKEW_SECS", defaults.max_clock_skew_secs)?,
            hello_time_tolerance_secs: parse_or(&lookup, "ROBERT_HELLO_TIME_TOLERANCE_SECS", defaults.hello_time_tolerance_secs)?,
            min_epochs_between_status_requests: parse_or(&lookup, "ROBERT_MIN_EPOCHS_BETWEEN_STATUS", defaults.min_epochs_between_status_requests)?,
            batch_page_size: parse_or(&lookup, "ROBERT_BATCH_PAGE_SIZE", defaults.batch_page_size)?,
            batch_workers: parse_or(&lookup, "ROBERT_BATCH_WORKERS", defaults.batch_workers)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.risk_threshold.is_finite() || self.risk_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.risk_threshold));
        }
        if self.contagious_period_days == 0 {
            return Err(ConfigError::NotPositive {
                name: "contagious_period_days",
            });
        }
        if self.retention_period_days == 0 {
            return Err(ConfigError::NotPositive {
                name: "retention_period_days",
            });
        }
        if self.batch_page_size == 0 {
            return Err(ConfigError::NotPositive {
                name: "batch_page_size",
            });
        }
        if self.batch_workers == 0 {
            return Err(ConfigError::NotPositive {
                name: "batch_workers",
            });
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}
