//! The named reducers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregation::{
    null_count, quantile, remove_nulls, AggregationError, AggregationResult, UnknownAggregation,
};

/// A reducer from a list of nullable samples to one scalar.
///
/// The eight value reducers ignore nulls and fail with
/// [`AggregationError::OnlyNulls`] when nothing is left. [`NullCount`] and
/// [`NullPercent`] look at the unfiltered list and never fail.
///
/// ```rust
/// use graphite_guard::aggregation::Aggregation;
///
/// let samples = [Some(1.1), None, Some(3.3)];
/// let agg: Aggregation = "median".parse().unwrap();
///
/// assert_eq!(agg.apply(&samples), Ok(3.3));
/// assert_eq!(Aggregation::NullCount.apply(&samples), Ok(1.0));
/// ```
///
/// [`NullCount`]: Aggregation::NullCount
/// [`NullPercent`]: Aggregation::NullPercent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Aggregation {
    /// Mean of the non-null values
    #[default]
    Avg,
    /// Sum of the non-null values
    Sum,
    /// Smallest non-null value
    Min,
    /// Largest non-null value
    Max,
    /// 50th percentile
    Median,
    /// 95th percentile
    P95,
    /// 99th percentile
    P99,
    /// 99.9th percentile
    P999,
    /// Number of null samples
    NullCount,
    /// Fraction of samples that are null
    NullPercent,
}

impl Aggregation {
    /// Every aggregation, in the order they are listed to users.
    pub const ALL: [Aggregation; 10] = [
        Aggregation::Avg,
        Aggregation::Sum,
        Aggregation::Min,
        Aggregation::Max,
        Aggregation::Median,
        Aggregation::P95,
        Aggregation::P99,
        Aggregation::P999,
        Aggregation::NullCount,
        Aggregation::NullPercent,
    ];

    /// The name used on the command line and as the perf-data label.
    pub fn name(&self) -> &'static str {
        match self {
            Aggregation::Avg => "avg",
            Aggregation::Sum => "sum",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::Median => "median",
            Aggregation::P95 => "95th",
            Aggregation::P99 => "99th",
            Aggregation::P999 => "999th",
            Aggregation::NullCount => "nullcnt",
            Aggregation::NullPercent => "nullpct",
        }
    }

    /// A one-line description for help output.
    pub fn description(&self) -> &'static str {
        match self {
            Aggregation::Avg => "mean average of all non-null values",
            Aggregation::Sum => "sum of all non-null values",
            Aggregation::Min => "minimum of all non-null values",
            Aggregation::Max => "maximum of all non-null values",
            Aggregation::Median => "median (50th percentile) of all non-null values",
            Aggregation::P95 => "95th percentile of all non-null values",
            Aggregation::P99 => "99th percentile of all non-null values",
            Aggregation::P999 => "99.9th percentile of all non-null values",
            Aggregation::NullCount => "count of null values",
            Aggregation::NullPercent => "percentage of null values (nullcnt / total points)",
        }
    }

    /// Reduces `samples` to a single value.
    pub fn apply(&self, samples: &[Option<f64>]) -> AggregationResult<f64> {
        match self {
            Aggregation::Sum => Ok(non_null(samples)?.iter().sum()),
            Aggregation::Avg => {
                let values = non_null(samples)?;
                Ok(values.iter().sum::<f64>() / values.len() as f64)
            }
            Aggregation::Min => Ok(non_null(samples)?
                .into_iter()
                .fold(f64::INFINITY, f64::min)),
            Aggregation::Max => Ok(non_null(samples)?
                .into_iter()
                .fold(f64::NEG_INFINITY, f64::max)),
            Aggregation::Median => quantile_of(samples, 0.5),
            Aggregation::P95 => quantile_of(samples, 0.95),
            Aggregation::P99 => quantile_of(samples, 0.99),
            Aggregation::P999 => quantile_of(samples, 0.999),
            Aggregation::NullCount => Ok(null_count(samples) as f64),
            Aggregation::NullPercent => Ok(null_fraction(samples)),
        }
    }
}

fn non_null(samples: &[Option<f64>]) -> AggregationResult<Vec<f64>> {
    let values = remove_nulls(samples);
    if values.is_empty() {
        Err(AggregationError::OnlyNulls)
    } else {
        Ok(values)
    }
}

fn quantile_of(samples: &[Option<f64>], q: f64) -> AggregationResult<f64> {
    quantile(&non_null(samples)?, q).ok_or(AggregationError::OnlyNulls)
}

/// `nullcnt / len`, or `0.0` for an empty list.
fn null_fraction(samples: &[Option<f64>]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    null_count(samples) as f64 / samples.len() as f64
}

/// Comma separated list of every aggregation name.
pub fn aggregation_names() -> String {
    Aggregation::ALL
        .iter()
        .map(Aggregation::name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Aggregation {
    type Err = UnknownAggregation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let aggregation = match name.as_str() {
            "avg" => Aggregation::Avg,
            "sum" => Aggregation::Sum,
            "min" => Aggregation::Min,
            "max" => Aggregation::Max,
            "median" => Aggregation::Median,
            "95th" | "p95" => Aggregation::P95,
            "99th" | "p99" => Aggregation::P99,
            "999th" | "p999" => Aggregation::P999,
            "nullcnt" => Aggregation::NullCount,
            "nullpct" => Aggregation::NullPercent,
            _ => {
                return Err(UnknownAggregation {
                    name: s.to_string(),
                    expected: aggregation_names(),
                })
            }
        };
        Ok(aggregation)
    }
}

impl TryFrom<String> for Aggregation {
    type Error = UnknownAggregation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Aggregation> for String {
    fn from(value: Aggregation) -> Self {
        value.name().to_string()
    }
}
