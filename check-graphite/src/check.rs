//! Threshold evaluation and a complete plugin run.

use graphite_guard::client::SeriesSource;
use graphite_guard::measure::measure;
use tracing::{info, warn};

use crate::cli::{Args, UsageError};
use crate::range::{Range, RangeError};
use crate::status::{pretty_float, CheckOutcome, PerfData, Status};

/// Warning and critical ranges; either may be absent, but not both.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdCheck {
    pub warning: Option<Range>,
    pub critical: Option<Range>,
}

impl ThresholdCheck {
    /// Parses both ranges. Blank text means the range is not set.
    pub fn new(warning: &str, critical: &str) -> Result<Self, UsageError> {
        let check = Self {
            warning: parse_optional(warning)?,
            critical: parse_optional(critical)?,
        };
        if check.warning.is_none() && check.critical.is_none() {
            return Err(UsageError::MissingThreshold);
        }
        Ok(check)
    }

    /// Critical wins over warning.
    pub fn evaluate(&self, value: f64) -> Status {
        if self.critical.as_ref().is_some_and(|r| r.alerts(value)) {
            Status::Critical
        } else if self.warning.as_ref().is_some_and(|r| r.alerts(value)) {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}

fn parse_optional(text: &str) -> Result<Option<Range>, RangeError> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        text.parse().map(Some)
    }
}

/// Measures the configured query and classifies the value.
///
/// Every failure to produce a value becomes an UNKNOWN outcome carrying
/// the error text.
pub async fn run_check<S>(source: &S, args: &Args, thresholds: &ThresholdCheck) -> CheckOutcome
where
    S: SeriesSource + ?Sized,
{
    let query = args.query();
    let measurement = match measure(source, &query, &args.window(), args.aggregation).await {
        Ok(measurement) => measurement,
        Err(e) => {
            warn!(error = %e, query = %query, "Check could not produce a value");
            return CheckOutcome::unknown(e.to_string());
        }
    };

    let status = thresholds.evaluate(measurement.value);
    info!(
        status = %status,
        value = measurement.value,
        aggregation = %measurement.aggregation,
        "Check evaluated"
    );

    let label = measurement.aggregation.name();
    let message = format!(
        "{} ({} is {})",
        args.name,
        label,
        pretty_float(measurement.value, 6)
    );
    let perf = PerfData::new(label, measurement.value, "").with_thresholds(
        thresholds.warning.as_ref().map(Range::to_string),
        thresholds.critical.as_ref().map(Range::to_string),
    );
    CheckOutcome::new(status, message).with_perfdata(perf)
}
