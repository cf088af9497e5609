//! Thumbnail repository
//!
//! Thumbnails are created against a board and deleted individually.
//! There is no update path.

use sqlx::{FromRow, SqlitePool};

use super::boards::DbError;

/// Title stored when the client sends none
pub const DEFAULT_TITLE: &str = "Untitled";

/// Thumbnail record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Thumbnail {
    pub id: i64,
    pub title: Option<String>,
    pub url: String,
    pub board_id: i64,
}

/// Thumbnail repository
pub struct ThumbnailRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ThumbnailRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a thumbnail on `board_id`.
    ///
    /// The insert selects from `boards`, so a missing board inserts nothing
    /// and comes back as `NotFound` without a separate existence check.
    pub async fn create(&self, board_id: i64, title: &str, url: &str) -> Result<Thumbnail, DbError> {
        let thumb: Thumbnail = sqlx::query_as(
            r#"
            INSERT INTO thumbnails (title, url, board_id)
            SELECT ?, ?, id FROM boards WHERE id = ?
            RETURNING id, title, url, board_id
            "#,
        )
        .bind(title)
        .bind(url)
        .bind(board_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::board_not_found(board_id))?;

        tracing::debug!(thumbnail_id = thumb.id, board_id, "thumbnail created");
        Ok(thumb)
    }

    pub async fn get(&self, id: i64) -> Result<Thumbnail, DbError> {
        sqlx::query_as("SELECT id, title, url, board_id FROM thumbnails WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let deleted = sqlx::query("DELETE FROM thumbnails WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(thumbnail_id = id, "thumbnail deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: "thumbnail",
        id: id.to_string(),
    }
}
