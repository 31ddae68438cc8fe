//! Session accessor.
//!
//! The save flow only needs to know whether a user is signed in and, if so,
//! which bearer token to present. `SessionProvider` is the narrow seam the
//! TUI depends on; `StaticSession` serves a token fixed at startup.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// The signed-in user, as far as saving searches is concerned.
#[derive(Clone)]
pub struct UserSession {
    token: SecretString,
}

impl UserSession {
    /// Create a session from a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into().into()),
        }
    }

    /// The bearer token.
    pub fn token(&self) -> &SecretString {
        &self.token
    }
}

impl From<SecretString> for UserSession {
    fn from(token: SecretString) -> Self {
        Self { token }
    }
}

impl fmt::Debug for UserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSession")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Source of the current user session.
pub trait SessionProvider: Send + Sync {
    /// The current user, or `None` when unauthenticated.
    fn current_user(&self) -> Option<UserSession>;
}

/// Session provider backed by a token known at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<UserSession>,
}

impl StaticSession {
    /// A provider that always reports the given user.
    pub fn signed_in(user: UserSession) -> Self {
        Self { user: Some(user) }
    }

    /// A provider that always reports no user.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Build from an optional configured token; blank tokens count as absent.
    pub fn from_token(token: Option<SecretString>) -> Self {
        Self {
            user: token
                .filter(|t| !t.expose_secret().trim().is_empty())
                .map(UserSession::from),
        }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<UserSession> {
        self.user.clone()
    }
}
