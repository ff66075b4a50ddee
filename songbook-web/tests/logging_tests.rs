//! Request logging under the default log filter
//!
//! Runs on the current-thread runtime so the thread-local subscriber sees
//! every event the router emits.

mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use helpers::log_capture::LogCapture;
use songbook_common::DataSet;
use songbook_web::session::InMemorySessionStore;
use songbook_web::{build_router, AppState, DEFAULT_LOG_FILTER};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[tokio::test]
async fn test_default_filter_logs_each_request() {
    let capture = LogCapture::new();
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_LOG_FILTER))
        .with(capture.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let media = TempDir::new().unwrap();
    let state = AppState::new(
        DataSet::builtin().unwrap(),
        Arc::new(InMemorySessionStore::with_ttl_minutes(60)),
    );
    let router = build_router(state, media.path());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    capture.assert_contains("finished processing request");
    let finished = capture.matching("finished processing request");
    assert!(finished
        .iter()
        .all(|r| r.level == Level::INFO && r.target.starts_with("tower_http")));
}
