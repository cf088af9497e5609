//! Database connection pool management
//!
//! The SQLite file (and its parent directory) is created on first run.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::migrations;
use super::repos::DbError;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open (or create) the database file and bring the schema up to date.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("thumbnails.db"), 5).await?;
/// ```
pub async fn create_pool(path: &Path, max_connections: u32) -> Result<SqlitePool, DbError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    migrations::run(&pool).await?;
    Ok(pool)
}

/// In-memory database for tests and throwaway runs.
///
/// Every SQLite memory connection is its own database, so the pool holds
/// exactly one connection and never recycles it.
pub async fn create_memory_pool() -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    migrations::run(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_missing_file_and_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("thumbnails.db");
        assert!(!path.exists());

        let pool = create_pool(&path, DEFAULT_MAX_CONNECTIONS).await.unwrap();
        assert!(path.exists());

        let (one,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }

    #[tokio::test]
    async fn reopen_keeps_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("thumbnails.db");

        let pool = create_pool(&path, 1).await.unwrap();
        sqlx::query("INSERT INTO boards (name) VALUES ('kept')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let pool = create_pool(&path, 1).await.unwrap();
        let (name,): (String,) = sqlx::query_as("SELECT name FROM boards")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(name, "kept");
    }
}
