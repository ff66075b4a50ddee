//! Session cookie encoding

use super::SessionToken;
use axum::http::{header, HeaderMap};

pub const SESSION_COOKIE: &str = "songbook_session";

/// Every well-formed session token in the `Cookie` request headers, in order
///
/// Browsers may send several cookies with the same name (e.g. a stale one
/// scoped to another path alongside the live one). Malformed values are
/// skipped.
pub fn session_tokens(headers: &HeaderMap) -> Vec<SessionToken> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == SESSION_COOKIE)
        .filter_map(|(_, value)| value.trim_matches('"').parse().ok())
        .collect()
}

/// `Set-Cookie` value establishing a session
pub fn set_session(token: &SessionToken) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token)
}

/// `Set-Cookie` value telling the browser to drop the session cookie
pub fn clear_session() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}
