//! Error types for the New Relic client.
//!
//! Responsibilities:
//! - Define the single error enum returned by every facade operation.
//! - Collapse the variants into the three caller-facing kinds
//!   (`Configuration`, `Server`, `NotFound`) via [`ClientError::kind`].
//!
//! Does NOT handle:
//! - Retrying or recovering from failures. Every error is terminal.
//!
//! Invariants:
//! - `Server` always carries the HTTP status and the raw response body.
//! - The API key never appears in any error message.

use newrelic_config::ConfigError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during New Relic client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing credential or a required companion field for a write.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Non-success HTTP status from the API.
    #[error("Server error ({status}) at {url}: {message}")]
    Server {
        status: u16,
        url: String,
        message: String,
    },

    /// Target entity absent from the fetched collection during a merge-update.
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Transport failure before a status was received.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body was not a JSON object.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Coarse error discriminant for callers that branch on failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Server,
    NotFound,
}

impl ClientError {
    /// Classify this error.
    ///
    /// Transport and decode failures count as `Server`; a bad URL is a
    /// `Configuration` problem.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) | Self::InvalidUrl(_) => ErrorKind::Configuration,
            Self::Server { .. } | Self::HttpError(_) | Self::InvalidResponse(_) => {
                ErrorKind::Server
            }
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for a `Server` error whose status is 404 (e.g. `show` of a missing id).
    pub fn is_not_found_status(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }
}

impl From<ConfigError> for ClientError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
