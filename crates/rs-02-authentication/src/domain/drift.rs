//! # Drift Window
//!
//! A request's epoch and time32 need not match the server exactly. The
//! tolerances are deployment parameters.
//!
//! ```text
//!        stale            accepted              future
//!  ──────────────┤◄───── max ─────●───── max ─────►├──────────────
//!                                now
//! ```

use super::errors::{AuthError, AuthResult};
use chrono::Duration;
use rs_01_epoch_clock::EpochInstant;
use shared_types::ServerConfig;

/// Default tolerated epoch distance.
pub const DEFAULT_MAX_EPOCH_DELTA: u32 = 1;

/// Default tolerated wall-clock distance, in seconds.
pub const DEFAULT_MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Accepted distance between a request and the server clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftPolicy {
    /// Maximum `|request epoch - server epoch|`
    pub max_epoch_delta: u32,
    /// Maximum `|request time - server time|`
    pub max_clock_skew: Duration,
}

impl Default for DriftPolicy {
    fn default() -> Self {
        Self {
            max_epoch_delta: DEFAULT_MAX_EPOCH_DELTA,
            max_clock_skew: Duration::seconds(DEFAULT_MAX_CLOCK_SKEW_SECS),
        }
    }
}

impl From<&ServerConfig> for DriftPolicy {
    fn from(config: &ServerConfig) -> Self {
        Self {
            max_epoch_delta: config.max_epoch_drift,
            max_clock_skew: Duration::seconds(
                i64::try_from(config.max_clock_skew_secs)
                    .unwrap_or(i64::MAX)
                    .min(i64::MAX / 1000),
            ),
        }
    }
}

impl DriftPolicy {
    /// Check the request epoch and request time against `server_now`.
    ///
    /// # Errors
    ///
    /// `StaleRequest` when either value lags beyond tolerance, otherwise
    /// `FutureRequest` when either value leads beyond tolerance.
    pub fn check(
        &self,
        server_now: &EpochInstant,
        request_epoch: i32,
        request_time: &EpochInstant,
    ) -> AuthResult<()> {
        let epoch_delta = i64::from(request_epoch) - i64::from(server_now.as_epoch_id());
        let skew_secs = (request_time.as_instant() - server_now.as_instant()).num_seconds();
        let max_epochs = i64::from(self.max_epoch_delta);
        let max_skew = self.max_clock_skew.num_seconds();

        if epoch_delta < -max_epochs || skew_secs < -max_skew {
            return Err(AuthError::StaleRequest {
                epoch_delta,
                skew_secs,
            });
        }
        if epoch_delta > max_epochs || skew_secs > max_skew {
            return Err(AuthError::FutureRequest {
                epoch_delta,
                skew_secs,
            });
        }
        Ok(())
    }
}
