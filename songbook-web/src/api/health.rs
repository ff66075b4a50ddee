//! Health check endpoint
//!
//! Reports what the service is holding in memory, so a monitor can tell an
//! empty or misloaded data set from a healthy one.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    /// Songs in the catalog
    pub songs: usize,
    /// Songs on the top-songs list
    pub top_songs: usize,
    /// (song, language) lyrics entries
    pub lyrics_entries: usize,
    /// Sessions that would currently authenticate
    pub live_sessions: usize,
}

/// GET /health
///
/// Public. Status is "degraded" when the catalog is empty or no one can log in.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let usable = !state.catalog.is_empty() && !state.credentials.is_empty();

    Json(HealthResponse {
        status: if usable { "ok" } else { "degraded" },
        module: "songbook-web",
        version: env!("CARGO_PKG_VERSION"),
        songs: state.catalog.len(),
        top_songs: state.catalog.top_song_ids().len(),
        lyrics_entries: state.lyrics.entry_count(),
        live_sessions: state.sessions.live_sessions(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
