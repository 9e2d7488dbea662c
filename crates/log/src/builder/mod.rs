//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Attaches `$layer` to a registry behind `$filter` and installs it globally.
macro_rules! init_subscriber {
    ($filter:expr, $layer:expr) => {
        Registry::default()
            .with($filter)
            .with($layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder will install.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the level directive without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))
    }

    /// Build and install the global subscriber.
    ///
    /// Output goes to stderr so stdout stays free for command output.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the level directive cannot be parsed
    /// - a global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let Config { colors, time, .. } = self.config;

        match self.config.format {
            Format::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_ansi(colors);
                if time {
                    init_subscriber!(filter, layer)
                } else {
                    init_subscriber!(filter, layer.without_time())
                }
            }
            Format::Pretty => {
                let layer = fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_ansi(colors);
                if time {
                    init_subscriber!(filter, layer)
                } else {
                    init_subscriber!(filter, layer.without_time())
                }
            }
            Format::Json => {
                let layer = fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false);
                if time {
                    init_subscriber!(filter, layer)
                } else {
                    init_subscriber!(filter, layer.without_time())
                }
            }
        }
    }
}
