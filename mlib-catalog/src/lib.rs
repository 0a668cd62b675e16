//! mlib-catalog library - song catalog service
//!
//! Stores song metadata, enriches new entries from an external song info
//! service, and serves CRUD, filtered listings and lyric pagination over
//! HTTP.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod lyrics;
pub mod models;
pub mod pagination;
pub mod services;

pub use crate::error::{CatalogError, CatalogResult};

use crate::services::SongService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Song lifecycle operations
    pub songs: Arc<SongService>,
}

impl AppState {
    /// Create new application state
    pub fn new(songs: SongService) -> Self {
        Self {
            songs: Arc::new(songs),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::song_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
