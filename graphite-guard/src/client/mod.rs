//! Graphite render API client.
//!
//! Builds a time-windowed `/render` query, sends it over HTTP and decodes
//! the JSON response into [`Series`].

mod config;
mod error;
mod graphite;
mod series;
mod time;

pub use config::{ClientConfig, Credentials, SecretString, DEFAULT_TIMEOUT};
pub use error::{SeriesError, SeriesResult};
pub use graphite::{decode_series, GraphiteClient, RenderRequest, SeriesSource, RENDER_PATH};
pub use series::{Datapoint, Series};
pub use time::{is_relative, normalize_time, TimeWindow, RELATIVE_UNIT_CHARS};
