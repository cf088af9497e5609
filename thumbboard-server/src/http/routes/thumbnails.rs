//! Thumbnail endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use serde::Serialize;
use thumbboard_core::resolve_thumbnail_url;

use super::MessageResponse;
use crate::db::{Thumbnail, ThumbnailRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, JsonBody};
use crate::http::server::AppState;
use crate::models::CreateThumbnailRequest;

/// Thumbnail response (no board back-reference)
#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
}

impl From<Thumbnail> for ThumbnailResponse {
    fn from(t: Thumbnail) -> Self {
        Self {
            id: t.id,
            url: t.url,
            title: t.title,
        }
    }
}

/// POST /api/boards/{id}/thumbnails - add a thumbnail to a board
async fn create_thumbnail(
    State(state): State<Arc<AppState>>,
    EntityId(board_id): EntityId,
    JsonBody(req): JsonBody<CreateThumbnailRequest>,
) -> Result<(StatusCode, Json<ThumbnailResponse>), ApiError> {
    let url = resolve_thumbnail_url(req.url());
    let thumb = ThumbnailRepo::new(&state.pool)
        .create(board_id, req.title(), &url)
        .await?;

    Ok((StatusCode::CREATED, Json(ThumbnailResponse::from(thumb))))
}

/// DELETE /api/thumbnails/{id}
async fn delete_thumbnail(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<MessageResponse>, ApiError> {
    ThumbnailRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Thumbnail deleted",
    }))
}

/// Thumbnail routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/boards/{id}/thumbnails", post(create_thumbnail))
        .route("/api/thumbnails/{id}", delete(delete_thumbnail))
}
