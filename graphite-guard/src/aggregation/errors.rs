//! Error types for the aggregation engine.

use thiserror::Error;

/// Result type for aggregation operations.
pub type AggregationResult<T> = Result<T, AggregationError>;

/// The one way a reducer can fail: nothing left to aggregate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationError {
    /// Every sample was null, or there were no samples at all.
    #[error("only null values returned")]
    OnlyNulls,
}

/// Returned by [`Aggregation::from_str`](std::str::FromStr) for names
/// outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown aggregation '{name}', expected one of: {expected}")]
pub struct UnknownAggregation {
    pub name: String,
    pub expected: String,
}
