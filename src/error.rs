use std::io;
use thiserror::Error;

/// Errors raised while gathering a fact.
///
/// Every variant means the same thing to the caller: the data source could not
/// be read, parsed or invoked. Probes turn all of them into the `"Unknown"`
/// sentinel; the variants only exist so debug logs say what went wrong.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not supported on this platform: {0}")]
    Unsupported(String),

    #[error("{0}")]
    Unavailable(String),
}

/// Result type alias for aperfetch
pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Create a command-not-found error
    pub fn command_not_found<S: Into<String>>(msg: S) -> Self {
        FetchError::CommandNotFound(msg.into())
    }

    /// Create a command-failed error
    pub fn command_failed<S: Into<String>>(msg: S) -> Self {
        FetchError::CommandFailed(msg.into())
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        FetchError::Parse(msg.into())
    }

    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        FetchError::Unsupported(msg.into())
    }

    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        FetchError::Unavailable(msg.into())
    }
}
