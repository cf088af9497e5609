//! thumbboard-server: boards of YouTube thumbnails over HTTP
//!
//! - [`db`]: SQLite pool, schema, and repositories
//! - [`http`]: axum router, handlers, and JSON error mapping
//! - [`models`]: request payloads

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_memory_pool, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
