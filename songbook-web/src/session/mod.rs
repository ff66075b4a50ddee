//! Session gate
//!
//! Handlers depend only on the [`SessionStore`] trait; the backing store can be
//! swapped without touching request handling. The session marker travels in a
//! cookie (see [`cookie`]) and is resolved by the [`SessionUser`] extractor.

pub mod cookie;
pub mod extractor;
pub mod memory;

pub use extractor::SessionUser;
pub use memory::InMemorySessionStore;

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque session marker handed to the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

impl FromStr for SessionToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Server-side session storage
///
/// A session is either present (Authenticated) or absent (Unauthenticated).
/// Expired sessions must behave exactly like absent ones.
pub trait SessionStore: Send + Sync {
    /// Username bound to `token`, if the session exists and has not expired
    fn authenticated_user(&self, token: &SessionToken) -> Option<String>;

    /// Start a new session for `username`
    fn create(&self, username: &str) -> SessionToken;

    /// End a session. Returns whether a live session was removed; destroying an
    /// unknown token is a no-op.
    fn destroy(&self, token: &SessionToken) -> bool;

    /// Drop every expired session, returning how many were removed
    fn purge_expired(&self) -> usize;

    /// Number of sessions that would still authenticate right now
    fn live_sessions(&self) -> usize;
}
