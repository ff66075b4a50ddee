//! Lyrics lookup endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::{ApiError, ApiResult, AppState};

/// Fixed message for every failed lookup
pub const LYRICS_NOT_FOUND: &str = "Letras no encontradas";

#[derive(Debug, Serialize)]
pub struct LyricsResponse {
    pub lyrics: String,
}

/// GET /get_lyrics/:song_id/:lang
///
/// Exact (song, language) lookup. Unknown songs, unsupported languages and
/// missing translations all produce the same 404 body.
pub async fn get_lyrics(
    State(state): State<AppState>,
    Path((song_id, lang)): Path<(String, String)>,
) -> ApiResult<Json<LyricsResponse>> {
    match state.lyrics.lookup(&song_id, &lang) {
        Ok(text) => Ok(Json(LyricsResponse {
            lyrics: text.to_string(),
        })),
        Err(e) => {
            debug!("Lyrics lookup failed: {}", e);
            Err(ApiError::NotFound(LYRICS_NOT_FOUND.to_string()))
        }
    }
}
