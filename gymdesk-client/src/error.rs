//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The session token is past its expiry; no request was sent
    #[error("Session expired")]
    SessionExpired,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (400 / 422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Sentence shown on the page banner, e.g. "Failed to load leads"
    ///
    /// Validation messages come from the backend and are shown as-is.
    pub fn user_message(&self, what: &str) -> String {
        match self {
            Self::Validation(msg) if !msg.trim().is_empty() => msg.clone(),
            Self::Unauthorized(_) | Self::SessionExpired => {
                "Your session has expired. Please sign in again.".to_string()
            }
            _ => format!("Failed to load {what}"),
        }
    }

    /// HTTP status the error came from, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::SessionExpired)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
