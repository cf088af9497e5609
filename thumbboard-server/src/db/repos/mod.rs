//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues one unit of work per call.
//! Multi-statement operations run inside a transaction.

pub mod boards;
pub mod thumbnails;

pub use boards::{Board, BoardRepo, BoardWithThumbnails, DbError};
pub use thumbnails::{Thumbnail, ThumbnailRepo, DEFAULT_TITLE};
