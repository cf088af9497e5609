//! Database layer - SQLite pool, schema, and repositories
//!
//! - One `SqlitePool` per process, passed to handlers through router state
//! - Board listing is two queries (boards, thumbnails), never one per board
//! - Lookups return `DbError::NotFound` instead of `Option`, callers map it to 404

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
