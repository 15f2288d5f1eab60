//! Command line arguments.

use std::time::Duration;

use clap::{ArgAction, Parser};
use graphite_guard::aggregation::Aggregation;
use graphite_guard::client::{ClientConfig, TimeWindow};
use thiserror::Error;

use crate::check::ThresholdCheck;
use crate::range::RangeError;
use crate::status::pretty_float;

const AFTER_HELP: &str = "\
The value of a Graphite query is checked against warning and critical
thresholds given in Nagios range format.

Example:

  check-graphite -g localhost -m 'my.metric' -a sum -w 10 -c 100

The sum of all non-null values returned by 'my.metric' is OK if it is
between 0 and 10, WARNING if greater than 10 but at most 100, CRITICAL if
greater than 100. Below zero it is CRITICAL.

Aggregations:
  avg      mean average of all non-null values
  sum      sum of all non-null values
  min      minimum of all non-null values
  max      maximum of all non-null values
  median   median (50th percentile) of all non-null values
  95th     95th percentile of all non-null values
  99th     99th percentile of all non-null values
  999th    99.9th percentile of all non-null values
  nullcnt  count of null values
  nullpct  percentage of null values (nullcnt / total points)";

/// Check that an aggregated Graphite query falls within thresholds.
#[derive(Parser, Debug, Clone)]
#[command(name = "check-graphite", author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Graphite host, with or without scheme
    #[arg(short = 'g', long, env = "GRAPHITE_HOST", default_value = "")]
    pub graphite: String,

    /// Warning range
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub warning: String,

    /// Critical range
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub critical: String,

    /// Username (HTTP Basic Auth)
    #[arg(short = 'U', long, default_value = "")]
    pub username: String,

    /// Password (HTTP Basic Auth)
    #[arg(
        short = 'P',
        long,
        env = "GRAPHITE_PASSWORD",
        hide_env_values = true,
        default_value = ""
    )]
    pub password: String,

    /// Short, descriptive name for the metric
    #[arg(short, long, default_value = "metric")]
    pub name: String,

    /// Graphite query
    #[arg(short = 'm', long, default_value = "")]
    pub target: String,

    /// 'from' value for the query
    #[arg(short, long, default_value = "1minute", allow_hyphen_values = true)]
    pub from: String,

    /// 'until' value for the query
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub until: String,

    /// Aggregation function: avg, sum, min, max, median, 95th, 99th, 999th, nullcnt, nullpct
    #[arg(short, long, default_value = "avg")]
    pub aggregation: Aggregation,

    /// Execution timeout in seconds, 0 for none
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// The value used in constantLine(n) by --wrap
    #[arg(short = 'l', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub line: f64,

    /// Wrap the query in a grouped constantLine(n) query
    #[arg(short = 'p', long)]
    pub wrap: bool,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Problems with otherwise parseable arguments.
#[derive(Debug, Error, PartialEq)]
pub enum UsageError {
    #[error("graphite is required")]
    MissingHost,

    #[error("target is required")]
    MissingTarget,

    #[error("must supply at least one of -w or -c")]
    MissingThreshold,

    #[error(transparent)]
    InvalidRange(#[from] RangeError),
}

impl Args {
    /// Checks the required options and parses the threshold ranges.
    pub fn validate(&self) -> Result<ThresholdCheck, UsageError> {
        if self.graphite.trim().is_empty() {
            return Err(UsageError::MissingHost);
        }
        if self.target.trim().is_empty() {
            return Err(UsageError::MissingTarget);
        }
        ThresholdCheck::new(&self.warning, &self.critical)
    }

    /// The query actually sent, wrapped with a constant line if requested.
    pub fn query(&self) -> String {
        if self.wrap {
            format!(
                "group({}, constantLine({}))",
                self.target,
                pretty_float(self.line, 6)
            )
        } else {
            self.target.clone()
        }
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(&self.from, &self.until)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.graphite.trim())
            .with_credentials(self.username.as_str(), self.password.as_str())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}
