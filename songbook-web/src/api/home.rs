//! Catalog page and catalog JSON

use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use songbook_common::{Language, SongId};
use std::collections::BTreeMap;

use crate::render;
use crate::session::SessionUser;
use crate::AppState;

/// GET /
///
/// Full catalog with the top songs first. Unauthenticated requests never get
/// here: the `SessionUser` extractor redirects them to /login.
pub async fn home(State(state): State<AppState>, user: SessionUser) -> Html<String> {
    Html(render::index_page(&user.username, &state.catalog, &state.lyrics))
}

/// Song as exposed through the JSON catalog
#[derive(Debug, Serialize)]
pub struct SongView {
    pub title: String,
    pub artist: String,
    pub file: String,
    pub video: String,
    pub info: String,
    /// Languages with lyrics available, in display order
    pub languages: Vec<Language>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub user: String,
    pub songs: BTreeMap<SongId, SongView>,
    pub top_songs: Vec<SongId>,
}

/// GET /api/catalog
pub async fn catalog_json(State(state): State<AppState>, user: SessionUser) -> Json<CatalogResponse> {
    let songs = state
        .catalog
        .songs()
        .map(|(id, song)| {
            let view = SongView {
                title: song.title.clone(),
                artist: song.artist.clone(),
                file: song.file.clone(),
                video: song.video.clone(),
                info: song.info.clone(),
                languages: state.lyrics.languages_for(id),
            };
            (id.clone(), view)
        })
        .collect();

    Json(CatalogResponse {
        user: user.username,
        songs,
        top_songs: state.catalog.top_song_ids().to_vec(),
    })
}
