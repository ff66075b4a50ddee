//! songbook-web - Lyrics catalog web service
//!
//! Serves a small song catalog with multi-language lyrics behind a login form.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use songbook_common::config::{load_toml_config, resolve_settings, SettingsOverrides};
use songbook_common::DataSet;
use songbook_web::session::{InMemorySessionStore, SessionStore};
use songbook_web::{build_router, AppState, DEFAULT_LOG_FILTER};
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often expired sessions are swept from the store
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// Command-line arguments for songbook-web
///
/// Unset values fall back to the config file, then to compiled defaults.
#[derive(Parser, Debug)]
#[command(name = "songbook-web")]
#[command(about = "Song catalog and lyrics web service")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "SONGBOOK_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Directory containing the audio and video files
    #[arg(long, env = "SONGBOOK_MEDIA_DIR")]
    media_dir: Option<PathBuf>,

    /// Idle minutes before a session expires
    #[arg(long, env = "SONGBOOK_SESSION_TTL_MINUTES")]
    session_ttl_minutes: Option<u64>,

    /// TOML data file replacing the built-in catalog
    #[arg(long, env = "SONGBOOK_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, env = "SONGBOOK_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting songbook-web v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let file_config =
        load_toml_config(args.config.as_deref()).context("Failed to load config file")?;
    let overrides = SettingsOverrides {
        host: args.host,
        port: args.port,
        media_dir: args.media_dir,
        session_ttl_minutes: args.session_ttl_minutes,
        data_file: args.data_file,
    };
    let settings = resolve_settings(overrides, file_config).context("Invalid configuration")?;

    let data = match &settings.data_file {
        Some(path) => {
            info!("Loading data set from {}", path.display());
            DataSet::from_toml_file(path).context("Failed to load data file")?
        }
        None => DataSet::builtin().context("Failed to load built-in data set")?,
    };
    info!(
        "Catalog: {} songs ({} top), {} users",
        data.catalog.len(),
        data.catalog.top_song_ids().len(),
        data.credentials.len()
    );

    if !settings.media_dir.is_dir() {
        warn!(
            "Media directory {} does not exist; audio and video will 404",
            settings.media_dir.display()
        );
    } else {
        info!("Media directory: {}", settings.media_dir.display());
    }

    let sessions = Arc::new(InMemorySessionStore::with_ttl_minutes(
        settings.session_ttl_minutes,
    ));
    spawn_session_purger(sessions.clone());

    let state = AppState::new(data, sessions);
    let app = build_router(state, &settings.media_dir);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("songbook-web listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Periodically drop expired sessions so abandoned logins do not accumulate
fn spawn_session_purger(sessions: Arc<InMemorySessionStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sessions.purge_expired();
            if removed > 0 {
                debug!("Purged {} expired sessions", removed);
            }
        }
    });
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
