//! songbook-web library - lyrics catalog web service
//!
//! Exposes the router and application state for the binary and for
//! integration tests.

use axum::Router;
use songbook_common::{Catalog, CredentialStore, DataSet, LyricsStore};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod api;
pub mod error;
pub mod render;
pub mod session;

pub use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

/// Log filter used when `RUST_LOG` is unset
///
/// Request spans and completions are emitted at INFO so this filter shows one
/// line per request.
pub const DEFAULT_LOG_FILTER: &str = "songbook_web=info,songbook_common=info,tower_http=info";

/// Application state shared across HTTP handlers
///
/// Catalog, lyrics and credentials are immutable after startup; only the
/// session store changes while serving.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub lyrics: Arc<LyricsStore>,
    pub credentials: Arc<CredentialStore>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(data: DataSet, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            catalog: Arc::new(data.catalog),
            lyrics: Arc::new(data.lyrics),
            credentials: Arc::new(data.credentials),
            sessions,
        }
    }
}

/// Build application router
///
/// Media files are served from `media_dir` under `/media`.
pub fn build_router(state: AppState, media_dir: &Path) -> Router {
    use axum::routing::get;

    // Session-gated pages (SessionUser extractor redirects to /login)
    let gated = Router::new()
        .route("/", get(api::home))
        .route("/api/catalog", get(api::catalog_json));

    // Public routes
    let public = Router::new()
        .route("/login", get(api::login_form).post(api::login_submit))
        .route("/logout", get(api::logout))
        .route("/get_lyrics/:song_id/:lang", get(api::get_lyrics))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/songbook.css", get(api::serve_songbook_css))
        .merge(api::health_routes());

    Router::new()
        .merge(gated)
        .merge(public)
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
