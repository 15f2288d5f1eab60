//! Prelude for commonly used types and traits in graphite-guard.

pub use crate::aggregation::{flatten, Aggregation, AggregationError};
pub use crate::client::{ClientConfig, GraphiteClient, Series, SeriesSource, TimeWindow};
pub use crate::error::{GuardError, Result};
pub use crate::logging::LoggingConfig;
pub use crate::measure::{measure, Measurement};
