//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (any origin)
//! - Request tracing and per-request timeout
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
