//! thumbboard-core: shared pieces of the thumbboard service
//!
//! - [`youtube`]: resolve a submitted video URL to its maxres thumbnail image
//! - [`config`]: layered configuration (file, environment, defaults)

pub mod config;
pub mod error;
pub mod youtube;

pub use config::{DatabaseSettings, ServerSettings, ThumbboardConfig};
pub use error::{CoreError, Result};
pub use youtube::{extract_thumbnail_url, extract_video_id, resolve_thumbnail_url};
