//! Song lifecycle
//!
//! Orchestrates create/read/update/delete, filtered listings and lyric
//! pagination on top of a `SongStore` and a `SongInfoProvider`, both
//! injected at construction.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::db::{SongFilter, SongStore};
use crate::error::{CatalogError, CatalogResult};
use crate::lyrics::paginate_lyrics;
use crate::models::{NewSong, Song, SongPatch};
use crate::pagination::PageWindow;
use crate::services::SongInfoProvider;

/// Song catalog operations
pub struct SongService {
    store: Arc<dyn SongStore>,
    song_info: Arc<dyn SongInfoProvider>,
}

impl SongService {
    pub fn new(store: Arc<dyn SongStore>, song_info: Arc<dyn SongInfoProvider>) -> Self {
        Self { store, song_info }
    }

    /// Create a song enriched with lyrics and file path
    ///
    /// All or nothing: if either enrichment or the insert fails, nothing is
    /// stored and the enriched data is discarded.
    pub async fn create(&self, title: &str, group: &str) -> CatalogResult<Song> {
        if title.is_empty() {
            return Err(CatalogError::Validation("title must not be empty".to_string()));
        }
        if group.is_empty() {
            return Err(CatalogError::Validation("group must not be empty".to_string()));
        }

        debug!(group = %group, title = %title, "Adding song");

        let details = self.song_info.fetch_details(group, title).await.map_err(|e| {
            warn!(group = %group, title = %title, error = %e, "Song info lookup failed");
            CatalogError::Enrichment(e)
        })?;

        let song = self
            .store
            .insert(NewSong {
                title: title.to_string(),
                group: group.to_string(),
                text: details.text,
                file_path: details.file_path,
            })
            .await?;

        info!(song_id = song.id, "Song added");
        Ok(song)
    }

    /// Fetch one song
    pub async fn get(&self, id: i64) -> CatalogResult<Song> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            warn!(song_id = id, "Song not found");
            CatalogError::NotFound(id)
        })
    }

    /// Filtered page of songs; a page past the end is empty
    pub async fn list(&self, filter: &SongFilter, window: PageWindow) -> CatalogResult<Vec<Song>> {
        let songs = self
            .store
            .find_filtered(filter, window.offset, window.page_size)
            .await?;

        debug!(
            page = window.page,
            page_size = window.page_size,
            returned = songs.len(),
            "Listed songs"
        );
        Ok(songs)
    }

    /// One page of stanzas from a song's lyrics
    ///
    /// A song without stored text has no stanzas.
    pub async fn lyrics(&self, id: i64, window: PageWindow) -> CatalogResult<Vec<String>> {
        let song = self.get(id).await?;

        Ok(song
            .text
            .as_deref()
            .map(|text| paginate_lyrics(text, window.page, window.page_size))
            .unwrap_or_default())
    }

    /// Merge `patch` into an existing song and persist it
    ///
    /// Concurrent updates to the same id are last write wins.
    pub async fn update(&self, id: i64, patch: SongPatch) -> CatalogResult<Song> {
        let mut song = self.get(id).await?;

        debug!(song_id = id, patch = ?patch, "Updating song");
        patch.apply_to(&mut song);

        let song = self.store.save(&song).await.map_err(|e| match e {
            // Row vanished between load and save
            mlib_common::Error::NotFound(_) => CatalogError::NotFound(id),
            other => CatalogError::Storage(other),
        })?;

        info!(song_id = id, "Song updated");
        Ok(song)
    }

    /// Delete an existing song
    pub async fn delete(&self, id: i64) -> CatalogResult<bool> {
        let song = self.get(id).await?;

        let deleted = self.store.delete(song.id).await?;

        info!(song_id = id, deleted, "Song deleted");
        Ok(deleted)
    }
}
