//! Session-gated request extractor
//!
//! Handlers that take a [`SessionUser`] argument only run for authenticated
//! requests. Everything else is redirected to the login page.

use super::{cookie, SessionToken};
use crate::AppState;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use tracing::debug;

pub const LOGIN_PATH: &str = "/login";

/// Authenticated caller
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub username: String,
    pub token: SessionToken,
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let tokens = cookie::session_tokens(&parts.headers);
        if tokens.is_empty() {
            debug!("No session cookie on {}, redirecting to login", parts.uri.path());
            return Err(Redirect::to(LOGIN_PATH));
        }

        // First token the store still recognises wins
        tokens
            .into_iter()
            .find_map(|token| {
                state
                    .sessions
                    .authenticated_user(&token)
                    .map(|username| SessionUser { username, token })
            })
            .ok_or_else(|| {
                debug!("Stale session on {}, redirecting to login", parts.uri.path());
                Redirect::to(LOGIN_PATH)
            })
    }
}
