//! Sample list helpers shared by the reducers.

use crate::client::Series;

/// Concatenates every datapoint value of every series, in fetch order.
///
/// Nulls are kept and nothing is re-sorted by timestamp.
pub fn flatten(series: &[Series]) -> Vec<Option<f64>> {
    let size = series.iter().map(|s| s.datapoints.len()).sum();
    let mut values = Vec::with_capacity(size);
    for s in series {
        values.extend(s.datapoints.iter().map(|d| d.value));
    }
    values
}

/// Drops null samples, keeping the order of the rest.
pub fn remove_nulls(samples: &[Option<f64>]) -> Vec<f64> {
    samples.iter().flatten().copied().collect()
}

/// Number of null samples.
pub fn null_count(samples: &[Option<f64>]) -> usize {
    samples.iter().filter(|v| v.is_none()).count()
}

/// Order-statistic quantile: sorts a copy of `values` ascending and returns
/// the element at `floor(n * q)`.
///
/// Never interpolates, so the result is always a member of `values`. An
/// index that lands on `n` (only reachable when `q >= 1.0`) is clamped to
/// the last element. Returns `None` for an empty slice.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let index = (sorted.len() as f64 * q).floor() as usize;
    Some(sorted[index.min(sorted.len() - 1)])
}
