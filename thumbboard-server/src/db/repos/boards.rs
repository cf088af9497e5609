//! Board repository
//!
//! - list: boards plus every thumbnail in two queries, grouped by `board_id`
//! - delete: thumbnails then board in one transaction

use std::collections::HashMap;

use sqlx::{FromRow, SqlitePool};

use super::thumbnails::Thumbnail;

/// Board record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Board {
    pub id: i64,
    pub name: String,
}

/// Board with its thumbnails in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct BoardWithThumbnails {
    pub id: i64,
    pub name: String,
    pub thumbnails: Vec<Thumbnail>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn board_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "board",
            id: id.to_string(),
        }
    }
}

/// Board repository
pub struct BoardRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BoardRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every board with its thumbnails, both ordered by id.
    pub async fn list(&self) -> Result<Vec<BoardWithThumbnails>, DbError> {
        let boards: Vec<Board> = sqlx::query_as("SELECT id, name FROM boards ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        let thumbnails: Vec<Thumbnail> =
            sqlx::query_as("SELECT id, title, url, board_id FROM thumbnails ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        let mut by_board: HashMap<i64, Vec<Thumbnail>> = HashMap::new();
        for thumb in thumbnails {
            by_board.entry(thumb.board_id).or_default().push(thumb);
        }

        Ok(boards
            .into_iter()
            .map(|b| BoardWithThumbnails {
                thumbnails: by_board.remove(&b.id).unwrap_or_default(),
                id: b.id,
                name: b.name,
            })
            .collect())
    }

    /// Insert a new, empty board.
    pub async fn create(&self, name: &str) -> Result<Board, DbError> {
        let board: Board = sqlx::query_as("INSERT INTO boards (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(self.pool)
            .await?;

        tracing::debug!(board = ?board, "board created");
        Ok(board)
    }

    pub async fn get(&self, id: i64) -> Result<Board, DbError> {
        sqlx::query_as("SELECT id, name FROM boards WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::board_not_found(id))
    }

    /// Overwrite the name when one is given, otherwise return the board as is.
    pub async fn update(&self, id: i64, name: Option<&str>) -> Result<Board, DbError> {
        let Some(name) = name else {
            return self.get(id).await;
        };

        sqlx::query_as("UPDATE boards SET name = ? WHERE id = ? RETURNING id, name")
            .bind(name)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::board_not_found(id))
    }

    /// Delete a board and every thumbnail on it.
    ///
    /// Returns the number of thumbnails removed with it.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM thumbnails WHERE board_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            // dropping tx rolls back
            return Err(DbError::board_not_found(id));
        }

        tx.commit().await?;
        tracing::debug!(board_id = id, thumbnails = removed, "board deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, ThumbnailRepo};

    #[tokio::test]
    async fn create_then_list_has_empty_thumbnails() {
        let pool = create_memory_pool().await.unwrap();
        let repo = BoardRepo::new(&pool);

        let board = repo.create("Favorites").await.unwrap();
        assert_eq!(board, Board { id: 1, name: "Favorites".into() });

        let boards = repo.list().await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name, "Favorites");
        assert!(boards[0].thumbnails.is_empty());
    }

    #[tokio::test]
    async fn list_groups_thumbnails_in_insertion_order() {
        let pool = create_memory_pool().await.unwrap();
        let boards = BoardRepo::new(&pool);
        let thumbs = ThumbnailRepo::new(&pool);

        let a = boards.create("a").await.unwrap();
        let b = boards.create("b").await.unwrap();
        thumbs.create(a.id, "first", "u1").await.unwrap();
        thumbs.create(b.id, "other", "u2").await.unwrap();
        thumbs.create(a.id, "second", "u3").await.unwrap();

        let listed = boards.list().await.unwrap();
        let titles: Vec<_> = listed[0]
            .thumbnails
            .iter()
            .map(|t| t.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["first", "second"]);
        assert_eq!(listed[1].thumbnails.len(), 1);
    }

    #[tokio::test]
    async fn update_without_name_is_noop() {
        let pool = create_memory_pool().await.unwrap();
        let repo = BoardRepo::new(&pool);
        let board = repo.create("keep me").await.unwrap();

        let same = repo.update(board.id, None).await.unwrap();
        assert_eq!(same, board);

        let renamed = repo.update(board.id, Some("renamed")).await.unwrap();
        assert_eq!(renamed.name, "renamed");
    }

    #[tokio::test]
    async fn missing_board_is_not_found() {
        let pool = create_memory_pool().await.unwrap();
        let repo = BoardRepo::new(&pool);

        assert!(matches!(repo.get(42).await, Err(DbError::NotFound { resource: "board", .. })));
        assert!(matches!(repo.update(42, Some("x")).await, Err(DbError::NotFound { .. })));
        assert!(matches!(repo.update(42, None).await, Err(DbError::NotFound { .. })));
        assert!(matches!(repo.delete(42).await, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn delete_cascades_to_thumbnails() {
        let pool = create_memory_pool().await.unwrap();
        let boards = BoardRepo::new(&pool);
        let thumbs = ThumbnailRepo::new(&pool);

        let doomed = boards.create("doomed").await.unwrap();
        let kept = boards.create("kept").await.unwrap();
        let t1 = thumbs.create(doomed.id, "one", "u1").await.unwrap();
        let t2 = thumbs.create(doomed.id, "two", "u2").await.unwrap();
        let survivor = thumbs.create(kept.id, "three", "u3").await.unwrap();

        assert_eq!(boards.delete(doomed.id).await.unwrap(), 2);

        assert!(matches!(thumbs.get(t1.id).await, Err(DbError::NotFound { .. })));
        assert!(matches!(thumbs.get(t2.id).await, Err(DbError::NotFound { .. })));
        assert_eq!(thumbs.get(survivor.id).await.unwrap(), survivor);
        assert_eq!(boards.list().await.unwrap().len(), 1);
    }
}
