//! Route handlers organized by resource

pub mod boards;
pub mod health;
pub mod index;
pub mod thumbnails;

use serde::Serialize;

/// `{"message": ...}` confirmation body for deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
