//! In-memory session store with idle expiry

use super::{SessionStore, SessionToken};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Clone)]
struct SessionEntry {
    username: String,
    created_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

/// Process-local session table
///
/// Sessions expire after `ttl` without activity. Nothing survives a restart.
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionToken, SessionEntry>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Convenience constructor from the configured TTL in minutes
    pub fn with_ttl_minutes(minutes: u64) -> Self {
        let minutes = i64::try_from(minutes).unwrap_or(i64::MAX);
        Self::new(Duration::try_minutes(minutes).unwrap_or(Duration::MAX))
    }

    /// Number of sessions currently held, expired or not
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_expired(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.last_seen) > self.ttl
    }

    pub(crate) fn authenticated_user_at(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> Option<String> {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        match sessions.get_mut(token) {
            None => return None,
            Some(entry) if !self.is_expired(entry, now) => {
                entry.last_seen = now;
                return Some(entry.username.clone());
            }
            Some(_) => {}
        }

        if let Some(entry) = sessions.remove(token) {
            debug!(
                "Session for '{}' expired (created {})",
                entry.username, entry.created_at
            );
        }
        None
    }

    pub(crate) fn create_at(&self, username: &str, now: DateTime<Utc>) -> SessionToken {
        let token = SessionToken::generate();
        let entry = SessionEntry {
            username: username.to_string(),
            created_at: now,
            last_seen: now,
        };

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, entry);
        token
    }

    pub(crate) fn live_sessions_at(&self, now: DateTime<Utc>) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|entry| !self.is_expired(entry, now))
            .count()
    }

    pub(crate) fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        before - sessions.len()
    }
}

impl SessionStore for InMemorySessionStore {
    fn authenticated_user(&self, token: &SessionToken) -> Option<String> {
        self.authenticated_user_at(token, Utc::now())
    }

    fn create(&self, username: &str) -> SessionToken {
        self.create_at(username, Utc::now())
    }

    fn destroy(&self, token: &SessionToken) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }

    fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    fn live_sessions(&self) -> usize {
        self.live_sessions_at(Utc::now())
    }
}
