//! Configuration presets for common scenarios

use super::{Config, FORMAT_ENV, Format, LEVEL_ENV};

impl Config {
    /// Create configuration from environment variables.
    ///
    /// `KENNEL_LOG` wins over `RUST_LOG`. An unknown `KENNEL_LOG_FORMAT`
    /// falls back to compact output.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Config::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse().unwrap_or_default();
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.colors = false;
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            colors: false,
            ..Self::default()
        }
    }

    /// Test configuration (no colours, no timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            colors: false,
            time: false,
        }
    }
}
