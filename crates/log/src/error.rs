//! Logging errors

/// Errors raised while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level directive could not be parsed.
    #[error("invalid log filter {0}")]
    Filter(String),

    /// The format name is not one of `compact`, `pretty`, `json`.
    #[error("unknown log format `{0}`")]
    UnknownFormat(String),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Result alias for logging setup.
pub type LogResult<T> = Result<T, LogError>;
