//! Logger configuration

mod presets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LogError;

/// Environment variable holding the level filter. Falls back to `RUST_LOG`.
pub const LEVEL_ENV: &str = "KENNEL_LOG";
/// Environment variable holding the output format.
pub const FORMAT_ENV: &str = "KENNEL_LOG_FORMAT";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// Multi-line output with source locations.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl Format {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Format::Compact => "compact",
            Format::Pretty => "pretty",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Format::Compact),
            "pretty" => Ok(Format::Pretty),
            "json" => Ok(Format::Json),
            _ => Err(LogError::UnknownFormat(s.to_string())),
        }
    }
}

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `info` or `kennel_validator=debug`.
    pub level: String,
    pub format: Format,
    /// ANSI colours. Ignored for [`Format::Json`].
    pub colors: bool,
    /// Include timestamps.
    pub time: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            colors: true,
            time: true,
        }
    }
}

impl Config {
    /// Overrides the level filter.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Overrides the output format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}
