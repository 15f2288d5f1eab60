//! One fetch-flatten-aggregate run.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::aggregation::{flatten, null_count, Aggregation};
use crate::client::{SeriesSource, TimeWindow};
use crate::error::{GuardError, Result};

/// What a run measured, along with the shape of the data it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub aggregation: Aggregation,
    pub value: f64,
    /// Number of series the backend returned.
    pub series: usize,
    /// Number of samples after flattening, nulls included.
    pub samples: usize,
    pub nulls: usize,
}

/// Fetches `query` over `window` from `source` and reduces the result with
/// `aggregation`.
///
/// Fails with [`GuardError::NoDatapoints`] when the flattened sample list is
/// empty, before any reducer runs.
///
/// ```rust,no_run
/// use graphite_guard::aggregation::Aggregation;
/// use graphite_guard::client::{ClientConfig, GraphiteClient, TimeWindow};
/// use graphite_guard::measure::measure;
///
/// # async fn example() -> graphite_guard::error::Result<()> {
/// let client = GraphiteClient::new(ClientConfig::new("graphite.internal"))?;
/// let window = TimeWindow::since("5min");
///
/// let m = measure(&client, "servers.*.load", &window, Aggregation::Max).await?;
/// println!("max load {} over {} series", m.value, m.series);
/// # Ok(())
/// # }
/// ```
#[instrument(skip(source), fields(aggregation = %aggregation))]
pub async fn measure<S>(
    source: &S,
    query: &str,
    window: &TimeWindow,
    aggregation: Aggregation,
) -> Result<Measurement>
where
    S: SeriesSource + ?Sized,
{
    let series = source.fetch(query, window).await?;
    let samples = flatten(&series);
    if samples.is_empty() {
        return Err(GuardError::NoDatapoints);
    }

    let value = aggregation.apply(&samples)?;
    let measurement = Measurement {
        aggregation,
        value,
        series: series.len(),
        samples: samples.len(),
        nulls: null_count(&samples),
    };
    debug!(
        value = measurement.value,
        series = measurement.series,
        samples = measurement.samples,
        nulls = measurement.nulls,
        "Aggregated render response"
    );
    Ok(measurement)
}
