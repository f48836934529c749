//! Risk engine configuration and validation

use rs_01_epoch_clock::EPOCHS_PER_DAY;
use rs_03_exposure_aggregation::AggregationStrategy;
use serde::{Deserialize, Serialize};
use shared_types::{ConfigError, ServerConfig};

/// Risk engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Exposures older than this are purged (days).
    pub contagious_period_days: u32,
    /// Aggregated score at or above which a registration is at risk.
    pub risk_threshold: f64,
    /// Epochs between risk and last status request before the risk expires (days).
    pub retention_period_days: u32,
    /// How per-contact scores are combined.
    pub aggregation: AggregationStrategy,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            contagious_period_days: 14,
            risk_threshold: 1.0,
            retention_period_days: 7,
            aggregation: AggregationStrategy::Sum,
        }
    }
}

impl RiskConfig {
    pub fn contagious_period_epochs(&self) -> i64 {
        i64::from(self.contagious_period_days) * EPOCHS_PER_DAY
    }

    pub fn retention_period_epochs(&self) -> i64 {
        i64::from(self.retention_period_days) * EPOCHS_PER_DAY
    }

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
        self.aggregation
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                key: "aggregation".to_string(),
                value: e.to_string(),
            })?;
        if !self.aggregation.can_reach(self.risk_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "risk_threshold".to_string(),
                value: format!(
                    "{} is unreachable with {} aggregation",
                    self.risk_threshold, self.aggregation
                ),
            });
        }
        Ok(())
    }
}

impl TryFrom<&ServerConfig> for RiskConfig {
    type Error = ConfigError;

    fn try_from(server: &ServerConfig) -> Result<Self, Self::Error> {
        let aggregation =
            server
                .aggregation
                .parse::<AggregationStrategy>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "ROBERT_AGGREGATION".to_string(),
                    value: server.aggregation.clone(),
                })?;
        let config = Self {
            contagious_period_days: server.contagious_period_days,
            risk_threshold: server.risk_threshold,
            retention_period_days: server.retention_period_days,
            aggregation,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RiskConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.contagious_period_epochs(), 1344);
        assert_eq!(config.retention_period_epochs(), 672);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = RiskConfig {
                risk_threshold: threshold,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_periods() {
        let config = RiskConfig {
            retention_period_days: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "retention_period_days"
            })
        );
    }

    #[test]
    fn test_rejects_unreachable_threshold() {
        let config = RiskConfig {
            aggregation: AggregationStrategy::Exponential { r0: 0.0071 },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "risk_threshold"
        ));

        let config = RiskConfig {
            risk_threshold: 0.05,
            ..config
        };
        assert!(config.validate().is_ok());

        let server = ServerConfig {
            aggregation: "exponential".to_string(),
            ..Default::default()
        };
        assert!(RiskConfig::try_from(&server).is_err());
    }

    #[test]
    fn test_from_server_config() {
        let server = ServerConfig {
            aggregation: "max".to_string(),
            risk_threshold: 0.5,
            ..Default::default()
        };
        let config = RiskConfig::try_from(&server).unwrap();
        assert_eq!(config.aggregation, AggregationStrategy::Max);
        assert_eq!(config.risk_threshold, 0.5);

        let server = ServerConfig {
            aggregation: "median".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            RiskConfig::try_from(&server),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
