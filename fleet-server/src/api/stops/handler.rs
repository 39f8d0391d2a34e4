//! Stop API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Stop, StopCreate, StopUpdate};

/// GET /api/stops
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Stop>>> {
    let stops = db::stops::find_all(state.pool()).await?;
    Ok(Json(stops))
}

/// GET /api/stops/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Stop>> {
    let stop = db::stops::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::StopNotFound, format!("Stop {id} not found"))
        })?;
    Ok(Json(stop))
}

/// POST /api/stops
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<StopCreate>,
) -> AppResult<Json<Stop>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.zone, "zone", MAX_SHORT_TEXT_LEN)?;
    let stop = db::stops::create(state.pool(), payload).await?;
    Ok(Json(stop))
}

/// PUT /api/stops/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StopUpdate>,
) -> AppResult<Json<Stop>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.zone, "zone", MAX_SHORT_TEXT_LEN)?;
    let stop = db::stops::update(state.pool(), id, payload).await?;
    Ok(Json(stop))
}

/// DELETE /api/stops/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = db::stops::delete(state.pool(), id).await?;
    Ok(Json(result))
}
