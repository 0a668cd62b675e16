//! mlib-catalog - Song catalog service
//!
//! Startup sequence: arguments → config file → logging → database → song
//! table migration → HTTP server. Shuts down gracefully on Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mlib_catalog::config::{Args, Config};
use mlib_catalog::db::{SongStore, SqliteSongStore};
use mlib_catalog::services::{SongInfoClient, SongService};
use mlib_catalog::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config_path();
    let toml = mlib_common::config::load_toml_config(&config_path)
        .context("Failed to load config file")?;
    let config_found = toml.is_some();
    let config = Config::resolve(args, toml.unwrap_or_default())
        .context("Invalid configuration")?;

    // RUST_LOG takes precedence over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mlib-catalog v{}", env!("CARGO_PKG_VERSION"));
    if config_found {
        info!("Config file: {}", config_path.display());
    } else {
        warn!(
            "Config file not found at {} - using defaults",
            config_path.display()
        );
    }

    info!("Database: {}", config.database_path.display());
    let pool = mlib_common::db::init_database(&config.database_path)
        .await
        .context("Failed to open database")?;

    let store = SqliteSongStore::new(pool);
    store.migrate().await.context("Failed to migrate song table")?;

    info!(
        "Song info service: {} (timeout {:?})",
        config.song_info_url, config.song_info_timeout
    );
    let song_info = SongInfoClient::new(config.song_info_url.clone(), config.song_info_timeout)
        .context("Failed to create song info client")?;

    let state = AppState::new(SongService::new(Arc::new(store), Arc::new(song_info)));
    let app = build_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
