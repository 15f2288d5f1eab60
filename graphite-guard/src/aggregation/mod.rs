//! Null-aware aggregation of fetched series.
//!
//! A fetch is first [`flatten`]ed into one list of nullable samples, then
//! reduced by an [`Aggregation`]:
//!
//! | name      | result                                   |
//! |-----------|------------------------------------------|
//! | `avg`     | mean of the non-null values              |
//! | `sum`     | sum of the non-null values               |
//! | `min`     | minimum of the non-null values           |
//! | `max`     | maximum of the non-null values           |
//! | `median`  | order-statistic quantile at 0.5          |
//! | `95th`    | order-statistic quantile at 0.95         |
//! | `99th`    | order-statistic quantile at 0.99         |
//! | `999th`   | order-statistic quantile at 0.999        |
//! | `nullcnt` | number of null samples                   |
//! | `nullpct` | null samples / all samples               |
//!
//! Reducers are pure functions and do not log.

mod errors;
mod reducer;
mod samples;

pub use errors::{AggregationError, AggregationResult, UnknownAggregation};
pub use reducer::{aggregation_names, Aggregation};
pub use samples::{flatten, null_count, quantile, remove_nulls};
