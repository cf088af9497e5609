//! Schema creation, run on every startup

use sqlx::SqlitePool;

use super::repos::DbError;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS boards (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(120) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS thumbnails (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        title    VARCHAR(255),
        url      VARCHAR(500) NOT NULL,
        board_id INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_thumbnails_board_id ON thumbnails(board_id)",
];

/// Create tables and indexes if they don't exist
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::debug!("Running schema migrations...");

    for statement in SCHEMA {
        sqlx::query(*statement).execute(pool).await?;
    }

    Ok(())
}
