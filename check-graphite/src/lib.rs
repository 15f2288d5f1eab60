//! # check-graphite
//!
//! A Nagios plugin that fetches a Graphite render query, reduces every
//! returned datapoint to one number and compares it against warning and
//! critical ranges.
//!
//! The fetching and aggregation live in [`graphite_guard`]; this crate adds
//! the plugin surface:
//!
//! - [`cli`]: command line arguments and their validation
//! - [`range`]: Nagios threshold range parsing
//! - [`check`]: threshold evaluation and a full run
//! - [`status`]: plugin states, perf data and output formatting

pub mod check;
pub mod cli;
pub mod range;
pub mod status;

pub use check::{run_check, ThresholdCheck};
pub use cli::{Args, UsageError};
pub use status::{CheckOutcome, Status};
