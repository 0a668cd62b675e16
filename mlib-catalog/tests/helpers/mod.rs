//! Shared fixtures for catalog integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mlib_catalog::db::{SongStore, SqliteSongStore};
use mlib_catalog::services::{EnrichmentError, SongDetails, SongInfoProvider, SongService};
use mlib_catalog::{build_router, AppState};

/// Song info provider answering from a fixed lyric text
pub struct FakeSongInfo {
    lyrics: String,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeSongInfo {
    pub fn with_lyrics(lyrics: &str) -> Self {
        Self {
            lyrics: lyrics.to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            lyrics: String::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SongInfoProvider for FakeSongInfo {
    async fn fetch_details(&self, _group: &str, title: &str) -> Result<SongDetails, EnrichmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(EnrichmentError::Status(502));
        }
        Ok(SongDetails {
            text: self.lyrics.clone(),
            file_path: format!("/music/{}.mp3", title.to_lowercase().replace(' ', "_")),
        })
    }
}

/// Router over an in-memory database and the given song info provider
pub async fn test_app(song_info: Arc<FakeSongInfo>) -> Router {
    let pool = mlib_common::db::init_memory_database().await.unwrap();
    let store = SqliteSongStore::new(pool);
    store.migrate().await.unwrap();

    let service = SongService::new(Arc::new(store), song_info);
    build_router(AppState::new(service))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response<Body> {
    send_raw(app, method, uri, body.to_string()).await
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: String) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST /song and return the stored song
pub async fn create_song(app: &Router, group: &str, title: &str) -> Value {
    let response = send_json(
        app,
        "POST",
        "/song",
        serde_json::json!({ "group": group, "title": title }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await["data"].clone()
}
