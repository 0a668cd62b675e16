//! Song endpoints
//!
//! - `GET    /songs?group=&title=&page=&limit=` filtered listing
//! - `POST   /song`                              create (enriched)
//! - `GET    /song/:id`                          full song
//! - `PUT    /song/:id`                          partial update
//! - `DELETE /song/:id`                          delete
//! - `GET    /song/:id/lyrics?page=&limit=`      lyric stanzas
//!
//! Successful responses wrap their payload as `{"data": ...}`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::SongFilter;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateSongRequest, Song, SongPatch};
use crate::pagination::{PageWindow, DEFAULT_SONG_PAGE_SIZE, DEFAULT_STANZA_PAGE_SIZE};
use crate::AppState;

/// Success envelope
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    fn new(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

/// Query parameters for `GET /songs`
///
/// `page` and `limit` are kept as raw strings so non-numeric values fall
/// back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListSongsQuery {
    pub group: Option<String>,
    pub title: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Query parameters for `GET /song/:id/lyrics`
#[derive(Debug, Default, Deserialize)]
pub struct LyricsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn parse_song_id(raw: &str) -> CatalogResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CatalogError::Validation(format!("Invalid song id: {}", raw)))
}

/// GET /songs
pub async fn list_songs(
    State(state): State<AppState>,
    query: Result<Query<ListSongsQuery>, QueryRejection>,
) -> CatalogResult<Json<DataResponse<Vec<Song>>>> {
    let Query(query) = query?;
    let window = PageWindow::from_query(
        query.page.as_deref(),
        query.limit.as_deref(),
        DEFAULT_SONG_PAGE_SIZE,
    );
    let filter = SongFilter {
        group: query.group,
        title: query.title,
    };

    let songs = state.songs.list(&filter, window).await?;
    Ok(DataResponse::new(songs))
}

/// GET /song/:id
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<DataResponse<Song>>> {
    let id = parse_song_id(&id)?;
    let song = state.songs.get(id).await?;
    Ok(DataResponse::new(song))
}

/// GET /song/:id/lyrics
pub async fn get_song_lyrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<LyricsQuery>, QueryRejection>,
) -> CatalogResult<Json<DataResponse<Vec<String>>>> {
    let id = parse_song_id(&id)?;
    let Query(query) = query?;
    let window = PageWindow::from_query(
        query.page.as_deref(),
        query.limit.as_deref(),
        DEFAULT_STANZA_PAGE_SIZE,
    );

    let stanzas = state.songs.lyrics(id, window).await?;
    Ok(DataResponse::new(stanzas))
}

/// POST /song
///
/// 201 with the stored song; 400 on invalid input; 500 if the song info
/// service or storage fails.
pub async fn create_song(
    State(state): State<AppState>,
    payload: Result<Json<CreateSongRequest>, JsonRejection>,
) -> CatalogResult<(StatusCode, Json<DataResponse<Song>>)> {
    let Json(request) = payload.inspect_err(|e| {
        tracing::warn!(error = %e, "Malformed create song request");
    })?;

    let song = state.songs.create(&request.title, &request.group).await?;
    Ok((StatusCode::CREATED, DataResponse::new(song)))
}

/// PUT /song/:id
pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SongPatch>, JsonRejection>,
) -> CatalogResult<Json<DataResponse<Song>>> {
    let id = parse_song_id(&id)?;
    let Json(patch) = payload.inspect_err(|e| {
        tracing::warn!(song_id = id, error = %e, "Malformed update song request");
    })?;

    let song = state.songs.update(id, patch).await?;
    Ok(DataResponse::new(song))
}

/// DELETE /song/:id
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<DataResponse<bool>>> {
    let id = parse_song_id(&id)?;
    let deleted = state.songs.delete(id).await?;
    Ok(DataResponse::new(deleted))
}

/// Build song routes
pub fn song_routes() -> Router<AppState> {
    Router::new()
        .route("/songs", get(list_songs))
        .route("/song", post(create_song))
        .route(
            "/song/:id",
            get(get_song).put(update_song).delete(delete_song),
        )
        .route("/song/:id/lyrics", get(get_song_lyrics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_song_id() {
        assert_eq!(parse_song_id("42").unwrap(), 42);
        assert!(matches!(parse_song_id("abc"), Err(CatalogError::Validation(_))));
    }
}
