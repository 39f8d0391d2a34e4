//! Position API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Position, PositionCreate, PositionUpdate};

/// GET /api/positions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Position>>> {
    let positions = db::positions::find_all(state.pool()).await?;
    Ok(Json(positions))
}

/// GET /api/positions/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Position>> {
    let position = db::positions::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::PositionNotFound, format!("Position {id} not found"))
        })?;
    Ok(Json(position))
}

/// POST /api/positions
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PositionCreate>,
) -> AppResult<Json<Position>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let position = db::positions::create(state.pool(), payload).await?;
    Ok(Json(position))
}

/// PUT /api/positions/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PositionUpdate>,
) -> AppResult<Json<Position>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    let position = db::positions::update(state.pool(), id, payload).await?;
    Ok(Json(position))
}

/// DELETE /api/positions/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = db::positions::delete(state.pool(), id).await?;
    Ok(Json(result))
}
