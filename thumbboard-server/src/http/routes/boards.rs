//! Board endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;

use super::thumbnails::ThumbnailResponse;
use super::MessageResponse;
use crate::db::{Board, BoardRepo, BoardWithThumbnails};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, JsonBody};
use crate::http::server::AppState;
use crate::models::{CreateBoardRequest, UpdateBoardRequest};

/// Board with its thumbnails
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub id: i64,
    pub name: String,
    pub thumbnails: Vec<ThumbnailResponse>,
}

impl From<BoardWithThumbnails> for BoardResponse {
    fn from(b: BoardWithThumbnails) -> Self {
        Self {
            id: b.id,
            name: b.name,
            thumbnails: b.thumbnails.into_iter().map(ThumbnailResponse::from).collect(),
        }
    }
}

/// Board without thumbnails (PUT response)
#[derive(Debug, Serialize)]
pub struct BoardSummary {
    pub id: i64,
    pub name: String,
}

impl From<Board> for BoardSummary {
    fn from(b: Board) -> Self {
        Self { id: b.id, name: b.name }
    }
}

/// GET /api/boards - every board with its thumbnails
async fn list_boards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BoardResponse>>, ApiError> {
    let boards = BoardRepo::new(&state.pool).list().await?;
    Ok(Json(boards.into_iter().map(BoardResponse::from).collect()))
}

/// POST /api/boards - create an empty board
async fn create_board(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateBoardRequest>,
) -> Result<(StatusCode, Json<BoardResponse>), ApiError> {
    let board = BoardRepo::new(&state.pool).create(req.name()).await?;

    Ok((
        StatusCode::CREATED,
        Json(BoardResponse {
            id: board.id,
            name: board.name,
            thumbnails: Vec::new(),
        }),
    ))
}

/// PUT /api/boards/{id} - rename when a name is given
async fn update_board(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    JsonBody(req): JsonBody<UpdateBoardRequest>,
) -> Result<Json<BoardSummary>, ApiError> {
    let board = BoardRepo::new(&state.pool)
        .update(id, req.name.as_deref())
        .await?;
    Ok(Json(BoardSummary::from(board)))
}

/// DELETE /api/boards/{id} - delete board and its thumbnails
async fn delete_board(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<MessageResponse>, ApiError> {
    BoardRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Board deleted",
    }))
}

/// Board routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/boards", get(list_boards).post(create_board))
        .route("/api/boards/{id}", put(update_board).delete(delete_board))
}
