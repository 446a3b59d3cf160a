//! Client configuration

use chrono::{DateTime, Utc};

use crate::session::Session;

/// Default backend when `GYMDESK_API_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client configuration for connecting to the GymDesk backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Bearer token issued by the auth service
    pub token: Option<String>,

    /// When the token stops being valid, if known
    pub token_expires_at: Option<DateTime<Utc>>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            token_expires_at: None,
            timeout: 30,
        }
    }

    /// Read from the environment
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | GYMDESK_API_URL | http://localhost:5000 |
    /// | GYMDESK_API_TOKEN | (none) |
    /// | GYMDESK_TOKEN_EXPIRES_AT | (none, RFC 3339) |
    /// | GYMDESK_TIMEOUT_SECS | 30 |
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("GYMDESK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        );
        config.token = std::env::var("GYMDESK_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        config.token_expires_at = std::env::var("GYMDESK_TOKEN_EXPIRES_AT")
            .ok()
            .and_then(|v| match DateTime::parse_from_rfc3339(v.trim()) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(e) => {
                    tracing::warn!(value = %v, error = %e, "Ignoring unparseable GYMDESK_TOKEN_EXPIRES_AT");
                    None
                }
            });
        config.timeout = std::env::var("GYMDESK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the token expiry
    pub fn with_token_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.token_expires_at = Some(expires_at);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Session built from the configured token, if any
    pub fn session(&self) -> Option<Session> {
        self.token.as_ref().map(|token| {
            let session = Session::new(token.clone());
            match self.token_expires_at {
                Some(at) => session.expires_at(at),
                None => session,
            }
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_session() {
        let at = Utc::now();
        let config = ClientConfig::new("http://api.test")
            .with_token("abc")
            .with_token_expiry(at)
            .with_timeout(5);
        assert_eq!(config.timeout, 5);
        let session = config.session().unwrap();
        assert_eq!(session.token(), "abc");
        assert_eq!(session.expiry(), Some(at));
    }

    #[test]
    fn test_no_token_no_session() {
        assert!(ClientConfig::default().session().is_none());
    }
}
