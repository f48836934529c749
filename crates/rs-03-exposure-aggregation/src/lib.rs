//! # rs-03-exposure-aggregation
//!
//! Collapses the exposure scores a registration accumulated over its
//! contagious window into the single value compared against the risk
//! threshold.
//!
//! The strategy is chosen once from configuration (`"sum"`, `"max"`,
//! `"exponential"`, `"decayed"`) and used as a value or as a
//! `dyn ExposureAggregator`.
//!
//! ```rust
//! use rs_03_exposure_aggregation::{AggregationStrategy, ExposureAggregator};
//!
//! let strategy: AggregationStrategy = "sum".parse().unwrap();
//! assert_eq!(strategy.aggregate(&[0.5, 0.25]), 0.75);
//! assert_eq!(strategy.aggregate(&[]), 0.0);
//! ```

pub mod error;
pub mod strategy;

pub use error::{AggregationError, AggregationResult};
pub use strategy::{AggregationStrategy, ExposureAggregator, DEFAULT_DECAY, DEFAULT_R0};
