//! Error types for A2A exchange operations

use thiserror::Error;

/// Main error type for A2A exchange operations
#[derive(Debug, Error)]
pub enum A2aError {
    /// Network-level failure (connect, DNS, socket). Never retried
    /// internally; callers decide.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Protocol-level error (invalid message format, unexpected response)
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Validation error (invalid request or response)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Incoming message carried no text part
    #[error("Message has no text part")]
    MissingPart,

    /// Missing or invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication or authorization error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Console or file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request timeout error
    #[error("Request timeout")]
    Timeout,

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for A2A exchange operations
pub type A2aResult<T> = Result<T, A2aError>;

impl From<reqwest::Error> for A2aError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            A2aError::Timeout
        } else if err.is_connect() {
            A2aError::Connection(format!("Connection error: {}", err))
        } else {
            A2aError::Connection(err.to_string())
        }
    }
}

impl From<&str> for A2aError {
    fn from(s: &str) -> Self {
        A2aError::Other(s.to_string())
    }
}

impl From<String> for A2aError {
    fn from(s: String) -> Self {
        A2aError::Other(s)
    }
}
