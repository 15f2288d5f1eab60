//! Error types for graphite-guard.
//!
//! Each stage of a check has its own error type ([`SeriesError`] for the
//! fetch, [`AggregationError`] for the reduction). [`GuardError`] wraps them
//! for callers that run the whole fetch-and-aggregate chain.

use thiserror::Error;

use crate::aggregation::AggregationError;
use crate::client::SeriesError;

/// The error type for a whole fetch-and-aggregate run.
#[derive(Error, Debug)]
pub enum GuardError {
    /// The backend could not be queried or its answer could not be decoded.
    #[error("failed to fetch metrics: {0}")]
    Fetch(#[from] SeriesError),

    /// The backend answered, but with no datapoints at all.
    #[error("no metrics received from graphite")]
    NoDatapoints,

    /// Datapoints came back but none could be aggregated.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

/// A type alias for `Result<T, GuardError>`.
pub type Result<T> = std::result::Result<T, GuardError>;
