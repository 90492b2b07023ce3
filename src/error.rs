//! Error types for autocomment

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the commenting workflow
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// The request could not be sent
    #[error("network error: {0}")]
    Network(String),

    /// The service did not answer within the client timeout
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The service answered with a non-2xx status
    #[error("server returned HTTP {status}: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error text from the response body, if any
        message: String,
    },

    /// The response body was not the expected JSON shape
    #[error("unexpected response: {0}")]
    Parse(String),

    /// A selected or dropped file could not be read as text
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Clipboard access failed
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Invalid configuration
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Server {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for autocomment operations
pub type Result<T> = std::result::Result<T, Error>;
