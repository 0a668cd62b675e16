//! Song database operations

use async_trait::async_trait;
use mlib_common::{Error, Result};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{NewSong, Song};

/// Substring filters for listings; `None` or empty imposes no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub group: Option<String>,
    pub title: Option<String>,
}

/// Durable song table
///
/// There is no version column: two concurrent read-modify-write cycles on
/// the same id resolve as last write wins.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Ensure the song table exists (idempotent)
    async fn migrate(&self) -> Result<()>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Song>>;

    /// Songs matching `filter`, ordered by id
    async fn find_filtered(&self, filter: &SongFilter, offset: i64, limit: i64) -> Result<Vec<Song>>;

    /// Insert a new song and return it with its assigned id
    async fn insert(&self, song: NewSong) -> Result<Song>;

    /// Overwrite all mutable fields of an existing song
    async fn save(&self, song: &Song) -> Result<Song>;

    /// Delete by id; `false` if no row was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}

#[derive(Debug, sqlx::FromRow)]
struct SongRow {
    id: i64,
    title: String,
    group_name: String,
    text: Option<String>,
    file_path: Option<String>,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: row.id,
            title: row.title,
            group: row.group_name,
            text: row.text,
            file_path: row.file_path,
        }
    }
}

/// SQLite-backed song store
#[derive(Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// `%needle%` with LIKE wildcards in `needle` escaped (escape char `\`)
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn migrate(&self) -> Result<()> {
        mlib_common::db::create_songs_table(&self.pool).await?;
        tracing::info!("Song table ready");
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Song>> {
        let row = sqlx::query_as::<_, SongRow>(
            "SELECT id, title, group_name, text, file_path FROM songs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Song::from))
    }

    async fn find_filtered(&self, filter: &SongFilter, offset: i64, limit: i64) -> Result<Vec<Song>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, title, group_name, text, file_path FROM songs WHERE 1 = 1");

        if let Some(group) = filter.group.as_deref().filter(|g| !g.is_empty()) {
            query
                .push(" AND group_name LIKE ")
                .push_bind(like_pattern(group))
                .push(" ESCAPE '\\'");
        }

        if let Some(title) = filter.title.as_deref().filter(|t| !t.is_empty()) {
            query
                .push(" AND title LIKE ")
                .push_bind(like_pattern(title))
                .push(" ESCAPE '\\'");
        }

        query
            .push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = query
            .build_query_as::<SongRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Song::from).collect())
    }

    async fn insert(&self, song: NewSong) -> Result<Song> {
        let result = sqlx::query(
            "INSERT INTO songs (title, group_name, text, file_path) VALUES (?, ?, ?, ?)",
        )
        .bind(&song.title)
        .bind(&song.group)
        .bind(&song.text)
        .bind(&song.file_path)
        .execute(&self.pool)
        .await?;

        Ok(song.with_id(result.last_insert_rowid()))
    }

    async fn save(&self, song: &Song) -> Result<Song> {
        let result = sqlx::query(
            r#"
            UPDATE songs
            SET title = ?, group_name = ?, text = ?, file_path = ?
            WHERE id = ?
            "#,
        )
        .bind(&song.title)
        .bind(&song.group)
        .bind(&song.text)
        .bind(&song.file_path)
        .bind(song.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("song {}", song.id)));
        }

        Ok(song.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
