//! Embedded static assets

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const APP_JS: &str = include_str!("../../ui/app.js");
const SONGBOOK_CSS: &str = include_str!("../../ui/songbook.css");

/// GET /static/app.js
///
/// Player and lyrics loader for the catalog page
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache"),
        ],
        APP_JS,
    )
        .into_response()
}

/// GET /static/songbook.css
pub async fn serve_songbook_css() -> Response {
    (
        StatusCode::OK,
        [("content-type", "text/css"), ("cache-control", "no-cache")],
        SONGBOOK_CSS,
    )
        .into_response()
}
