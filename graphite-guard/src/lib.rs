//! # graphite-guard - Graphite queries reduced to one number
//!
//! graphite-guard fetches time series from a Graphite render API and
//! reduces them to a single scalar with a null-aware aggregation, ready to
//! be judged against monitoring thresholds.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use graphite_guard::prelude::*;
//!
//! # async fn example() -> graphite_guard::error::Result<()> {
//! let client = GraphiteClient::new(
//!     ClientConfig::new("graphite.internal:8080")
//!         .with_credentials("monitor", "s3cret")
//!         .with_timeout(Duration::from_secs(5)),
//! )?;
//!
//! // `10min` is sent as `from=-10min`
//! let window = TimeWindow::since("10min");
//! let series = client.fetch("sumSeries(app.*.errors)", &window).await?;
//!
//! let samples = flatten(&series);
//! match Aggregation::P95.apply(&samples) {
//!     Ok(value) => println!("p95 = {value}"),
//!     Err(e) => println!("{e}"), // "only null values returned"
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`client`**: `/render` query construction, HTTP transport, and
//!   decoding of `[value, timestamp]` datapoints
//! - **`aggregation`**: flattening and the ten named reducers
//! - **`measure`**: the fetch, flatten and aggregate chain in one call
//! - **`logging`**: `tracing-subscriber` setup writing to stderr
//! - **`error`**: the crate-level error type

pub mod aggregation;
pub mod client;
pub mod error;
pub mod logging;
pub mod measure;
pub mod prelude;
