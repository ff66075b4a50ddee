//! HTTP API handlers for songbook-web

pub mod auth;
pub mod health;
pub mod home;
pub mod lyrics;
pub mod ui;

pub use auth::{login_form, login_submit, logout};
pub use health::health_routes;
pub use home::{catalog_json, home};
pub use lyrics::get_lyrics;
pub use ui::{serve_app_js, serve_songbook_css};
