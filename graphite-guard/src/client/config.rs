//! Connection settings for the Graphite render API.

use std::fmt;
use std::time::Duration;

use zeroize::ZeroizeOnDrop;

/// Default request timeout, matching the plugin's `--timeout` default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A password that is wiped from memory when dropped and never printed.
#[derive(Clone, ZeroizeOnDrop)]
pub struct SecretString(String);

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(***)")
    }
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the secret value. Avoid storing the result.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// HTTP Basic Auth credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Configuration for a [`GraphiteClient`](super::GraphiteClient).
///
/// ```rust
/// use std::time::Duration;
/// use graphite_guard::client::ClientConfig;
///
/// let config = ClientConfig::new("graphite.internal:8080")
///     .with_credentials("monitor", "s3cret")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.endpoint(), "http://graphite.internal:8080");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    host: String,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the given host, with or without a scheme.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            credentials: None,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Attaches Basic Auth credentials. An empty username leaves the
    /// request unauthenticated.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Self {
        let username = username.into();
        self.credentials = if username.is_empty() {
            None
        } else {
            Some(Credentials {
                username,
                password: password.into(),
            })
        };
        self
    }

    /// Sets the timeout bounding the whole request. Zero disables it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// The host as given by the caller.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The host with an explicit scheme, `http://` if none was given.
    pub fn endpoint(&self) -> String {
        let host = self.host.trim();
        if host.starts_with("https://") || host.starts_with("http://") {
            host.to_string()
        } else {
            format!("http://{host}")
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// `None` when requests may take as long as they need.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
