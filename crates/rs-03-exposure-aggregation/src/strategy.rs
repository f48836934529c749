//! # Aggregation Strategies
//!
//! | Strategy          | Result                                  |
//! |-------------------|-----------------------------------------|
//! | `Sum`             | `Σ sᵢ`                                  |
//! | `Max`             | `max sᵢ`                                |
//! | `Exponential`     | `1 − exp(−r0 · Σ sᵢ)`                   |
//! | `DecayedWeighted` | `Σ decay^(n−1−i) · sᵢ` (latest weighs 1) |
//!
//! Every strategy maps an empty slice to `0.0`. `Exponential` approaches
//! 1.0 from below, so a risk threshold of 1.0 or more is rejected with it.

use crate::error::{AggregationError, AggregationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default infection rate for `Exponential`.
pub const DEFAULT_R0: f64 = 0.0071;

/// Default per-position decay for `DecayedWeighted`.
pub const DEFAULT_DECAY: f64 = 0.9;

/// Collapses a flat list of exposure scores into one number.
pub trait ExposureAggregator: Send + Sync {
    fn aggregate(&self, scores: &[f64]) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregationStrategy {
    #[default]
    Sum,
    Max,
    Exponential {
        r0: f64,
    },
    /// Scores ordered oldest first.
    DecayedWeighted {
        decay: f64,
    },
}

impl AggregationStrategy {
    /// Configuration name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            AggregationStrategy::Sum => "sum",
            AggregationStrategy::Max => "max",
            AggregationStrategy::Exponential { .. } => "exponential",
            AggregationStrategy::DecayedWeighted { .. } => "decayed",
        }
    }

    /// Least upper bound of `aggregate` over non-negative scores, for the
    /// strategies whose output is bounded. `Exponential` approaches 1.0
    /// without reaching it.
    pub fn supremum(&self) -> Option<f64> {
        match self {
            AggregationStrategy::Exponential { .. } => Some(1.0),
            AggregationStrategy::Sum
            | AggregationStrategy::Max
            | AggregationStrategy::DecayedWeighted { .. } => None,
        }
    }

    /// Whether some exposure history aggregates to at least `threshold`.
    pub fn can_reach(&self, threshold: f64) -> bool {
        self.supremum().map_or(true, |bound| threshold < bound)
    }

    pub fn validate(&self) -> AggregationResult<()> {
        match *self {
            AggregationStrategy::Sum | AggregationStrategy::Max => Ok(()),
            AggregationStrategy::Exponential { r0 } => {
                if r0.is_finite() && r0 > 0.0 {
                    Ok(())
                } else {
                    Err(AggregationError::InvalidParameter {
                        name: "r0",
                        value: r0,
                    })
                }
            }
            AggregationStrategy::DecayedWeighted { decay } => {
                if decay.is_finite() && decay > 0.0 && decay <= 1.0 {
                    Ok(())
                } else {
                    Err(AggregationError::InvalidParameter {
                        name: "decay",
                        value: decay,
                    })
                }
            }
        }
    }
}

impl ExposureAggregator for AggregationStrategy {
    fn aggregate(&self, scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        match *self {
            AggregationStrategy::Sum => scores.iter().sum(),
            AggregationStrategy::Max => scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            AggregationStrategy::Exponential { r0 } => {
                let total: f64 = scores.iter().sum();
                1.0 - (-r0 * total).exp()
            }
            AggregationStrategy::DecayedWeighted { decay } => {
                let mut weight = 1.0;
                let mut total = 0.0;
                for score in scores.iter().rev() {
                    total += weight * score;
                    weight *= decay;
                }
                total
            }
        }
    }
}

impl FromStr for AggregationStrategy {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(AggregationStrategy::Sum),
            "max" => Ok(AggregationStrategy::Max),
            "exponential" => Ok(AggregationStrategy::Exponential { r0: DEFAULT_R0 }),
            "decayed" => Ok(AggregationStrategy::DecayedWeighted {
                decay: DEFAULT_DECAY,
            }),
            other => Err(AggregationError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
