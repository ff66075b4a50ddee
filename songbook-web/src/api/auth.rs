//! Login and logout handlers
//!
//! Login only ever answers "redirect to /" or "show the form again"; the
//! response never says whether the username or the password was wrong.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::render;
use crate::session::cookie;
use crate::AppState;

/// Login form fields
///
/// Missing fields are rejected by the `Form` extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /login
pub async fn login_form() -> Html<String> {
    Html(render::login_page())
}

/// POST /login
pub async fn login_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    if !state.credentials.verify(&form.username, &form.password) {
        warn!("Failed login attempt for user '{}'", form.username);
        return Html(render::login_page()).into_response();
    }

    // Replace any session the browser already carries
    for previous in cookie::session_tokens(&headers) {
        state.sessions.destroy(&previous);
    }

    let token = state.sessions.create(&form.username);
    info!("User '{}' logged in", form.username);

    (
        [(header::SET_COOKIE, cookie::set_session(&token))],
        Redirect::to("/"),
    )
        .into_response()
}

/// GET /logout
///
/// Always clears the cookie and redirects, whether or not a session existed.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ended = cookie::session_tokens(&headers)
        .iter()
        .filter(|token| state.sessions.destroy(token))
        .count();
    if ended > 0 {
        info!("{} session(s) ended by logout", ended);
    }

    (
        [(header::SET_COOKIE, cookie::clear_session())],
        Redirect::to("/login"),
    )
        .into_response()
}
