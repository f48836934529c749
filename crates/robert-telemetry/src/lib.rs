//! # ROBERT Telemetry
//!
//! Log pipeline and metrics exposition shared by every subsystem.
//!
//! Subsystems log through `tracing` macros with a `[rs-NN]` prefix and
//! structured fields; this crate decides where those events go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use robert_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROBERT_SERVICE_NAME` | `robert-server` | Service name |
//! | `ROBERT_LOG_LEVEL` | `info` | `EnvFilter` directives, `RUST_LOG` as fallback |
//! | `ROBERT_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `ROBERT_JSON_LOGS` | `false` | JSON lines, default `true` in containers |

mod config;
mod metrics;
mod subscriber;

pub use config::TelemetryConfig;
pub use metrics::render_metrics;
pub use subscriber::env_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),

    #[error("Failed to encode metrics: {0}")]
    Metrics(String),
}

/// Install the global `tracing` subscriber described by `config`.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    subscriber::init_subscriber(config)?;
    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_only_once() {
        let config = TelemetryConfig {
            console_output: false,
            ..Default::default()
        };
        assert!(init_telemetry(&config).is_ok());
        assert!(matches!(
            init_telemetry(&config),
            Err(TelemetryError::AlreadyInitialized(_))
        ));
    }
}
