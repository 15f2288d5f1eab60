//! Render API response types.
//!
//! With `format=json`, `/render` returns
//!
//! ```json
//! [{"target": "servers.web1.load", "datapoints": [[0.5, 1700000000], [null, 1700000060]]}]
//! ```
//!
//! Datapoints are positional pairs, so [`Datapoint`] is decoded by hand.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One named series returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Series {
    /// Backend-assigned label, usually the target expression echoed back.
    pub target: String,
    pub datapoints: Vec<Datapoint>,
}

impl Series {
    pub fn new(target: impl Into<String>, datapoints: Vec<Datapoint>) -> Self {
        Self {
            target: target.into(),
            datapoints,
        }
    }

    /// Number of datapoints whose value is null.
    pub fn null_count(&self) -> usize {
        self.datapoints.iter().filter(|d| d.value.is_none()).count()
    }
}

/// A single `(value, timestamp)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datapoint {
    pub value: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl Datapoint {
    pub fn new(value: Option<f64>, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }
}

impl<'de> Deserialize<'de> for Datapoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(DatapointVisitor)
    }
}

struct DatapointVisitor;

impl<'de> Visitor<'de> for DatapointVisitor {
    type Value = Datapoint;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a [value, timestamp] array")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let value: Option<f64> = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let seconds: Option<f64> = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let seconds = seconds.ok_or_else(|| de::Error::custom("datapoint timestamp is null"))?;

        // Extra trailing elements are tolerated.
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        let timestamp = DateTime::from_timestamp(seconds as i64, 0).ok_or_else(|| {
            de::Error::custom(format!("datapoint timestamp {seconds} is out of range"))
        })?;

        Ok(Datapoint { value, timestamp })
    }
}
