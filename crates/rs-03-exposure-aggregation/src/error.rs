//! Error types for aggregation configuration

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AggregationError {
    #[error("Unknown aggregation strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type AggregationResult<T> = Result<T, AggregationError>;
