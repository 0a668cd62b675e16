//! Table schemas
//!
//! All statements are idempotent and safe to run on every startup.

use crate::Result;
use sqlx::SqlitePool;

/// Create the `songs` table and its lookup indexes
///
/// `AUTOINCREMENT` keeps ids monotonically increasing and never reused, even
/// after the highest row is deleted. `text` and `file_path` are nullable so
/// rows written before enrichment existed can still be read.
pub async fn create_songs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            group_name TEXT NOT NULL,
            text TEXT,
            file_path TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_songs_group_name ON songs(group_name)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_songs_title ON songs(title)")
        .execute(pool)
        .await?;

    Ok(())
}
