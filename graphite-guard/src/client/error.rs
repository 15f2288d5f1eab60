use thiserror::Error;

/// Errors that can occur when fetching series from Graphite.
///
/// Every variant is fatal for the fetch that produced it; there are no
/// partial results.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// The client could not be built from its configuration.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Network error (connection refused, timeout, truncated body, etc.).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The response body was not a list of series.
    #[error("Decode error: {message}")]
    Decode { message: String },
}

impl SeriesError {
    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns true if the request never produced a readable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, SeriesError::Network { .. })
    }
}

impl From<reqwest::Error> for SeriesError {
    fn from(err: reqwest::Error) -> Self {
        SeriesError::Network {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SeriesError {
    fn from(err: serde_json::Error) -> Self {
        SeriesError::Decode {
            message: err.to_string(),
        }
    }
}

/// Result type for series client operations.
pub type SeriesResult<T> = std::result::Result<T, SeriesError>;
