//! Logging setup for checks.
//!
//! Plugins report through their single stdout line and exit code, so logs
//! always go to stderr. Nothing is logged unless [`init_logging`] is called.

use tracing::Level;

/// Configuration for the `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for everything outside this crate
    pub level: Level,
    /// Log level for graphite-guard components
    pub guard_level: Level,
    /// Whether to use JSON output format
    pub json_format: bool,
    /// Environment filter override
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            guard_level: Level::WARN,
            json_format: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Maps a `-v` count to a configuration: 0 warns, 1 shows this crate's
    /// info, 2 its debug output, 3 and up traces everything.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let (level, guard_level) = match verbosity {
            0 => (Level::WARN, Level::WARN),
            1 => (Level::WARN, Level::INFO),
            2 => (Level::INFO, Level::DEBUG),
            _ => (Level::TRACE, Level::TRACE),
        };
        Self {
            level,
            guard_level,
            ..Self::default()
        }
    }

    /// Sets whether to use JSON output format.
    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// Sets a custom environment filter.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the environment filter string.
    pub fn env_filter(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            filter.clone()
        } else {
            format!(
                "{},graphite_guard={}",
                self.level.as_str().to_lowercase(),
                self.guard_level.as_str().to_lowercase()
            )
        }
    }
}

/// Installs a global stderr subscriber. `RUST_LOG` takes precedence over
/// the configured filter.
///
/// Fails if a global subscriber is already set.
///
/// ```rust,no_run
/// use graphite_guard::logging::{init_logging, LoggingConfig};
///
/// init_logging(LoggingConfig::from_verbosity(2)).unwrap();
/// ```
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
