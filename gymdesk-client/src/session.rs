//! Session (bearer token + expiry)
//!
//! The token is handed to the client at construction instead of being read
//! from ambient storage on every request. The handle is shared so a caller
//! can swap or clear the token without rebuilding the client.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::{ClientError, ClientResult};

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// A session without an expiry never expires locally; the backend decides
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// 不打印 token
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Shared, swappable session slot
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionHandle {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    pub fn set(&self, session: Session) {
        *self.inner.write() = Some(session);
    }

    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    /// Authorization header value for a request sent at `now`
    ///
    /// `Ok(None)` when anonymous. An expired session blocks the request.
    pub fn authorization_at(&self, now: DateTime<Utc>) -> ClientResult<Option<String>> {
        match self.inner.read().as_ref() {
            None => Ok(None),
            Some(session) if session.is_expired_at(now) => {
                tracing::warn!(expired_at = ?session.expiry(), "Session expired, request blocked");
                Err(ClientError::SessionExpired)
            }
            Some(session) => Ok(Some(session.bearer())),
        }
    }

    pub fn authorization(&self) -> ClientResult<Option<String>> {
        self.authorization_at(Utc::now())
    }
}

impl From<Session> for SessionHandle {
    fn from(session: Session) -> Self {
        Self::new(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_blocks() {
        let now = Utc::now();
        let handle = SessionHandle::from(Session::new("t").expires_at(now - Duration::seconds(1)));
        assert!(matches!(
            handle.authorization_at(now),
            Err(ClientError::SessionExpired)
        ));

        handle.set(Session::new("t2").expires_at(now + Duration::hours(1)));
        assert_eq!(
            handle.authorization_at(now).unwrap().as_deref(),
            Some("Bearer t2")
        );
    }

    #[test]
    fn test_anonymous_and_clear() {
        let handle = SessionHandle::from(Session::new("t"));
        assert!(handle.authorization().unwrap().is_some());
        handle.clear();
        assert!(handle.authorization().unwrap().is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let s = format!("{:?}", Session::new("secret-token"));
        assert!(!s.contains("secret-token"));
    }
}
