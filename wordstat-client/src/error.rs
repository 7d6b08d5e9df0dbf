//! # Client Error Types
//!
//! Unified error handling for Wordstat API operations.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for Wordstat client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Wordstat API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Create an API error from an HTTP status and extracted message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if error is recoverable (worth retrying)
    ///
    /// The client never retries on its own; this is advisory for callers
    /// that want to layer their own retry policy on top.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Http(e) => e.is_timeout() || e.is_connect(),
            ClientError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
