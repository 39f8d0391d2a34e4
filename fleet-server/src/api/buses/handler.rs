//! Bus API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Bus, BusCreate, BusUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/buses
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Bus>>> {
    let buses = db::buses::find_all(state.pool(), query.include_inactive).await?;
    Ok(Json(buses))
}

/// GET /api/buses/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Bus>> {
    let bus = db::buses::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::BusNotFound, format!("Bus {id} not found"))
        })?;
    Ok(Json(bus))
}

/// POST /api/buses
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BusCreate>,
) -> AppResult<Json<Bus>> {
    validate_required_text(&payload.plate_number, "plate_number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.model, "model", MAX_NAME_LEN)?;
    if payload.capacity < 0 {
        return Err(AppError::validation("capacity must not be negative"));
    }

    let bus = db::buses::create(state.pool(), payload).await?;
    Ok(Json(bus))
}

/// PUT /api/buses/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BusUpdate>,
) -> AppResult<Json<Bus>> {
    validate_optional_text(&payload.plate_number, "plate_number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.model, "model", MAX_NAME_LEN)?;
    if let Some(capacity) = payload.capacity
        && capacity < 0
    {
        return Err(AppError::validation("capacity must not be negative"));
    }

    let bus = db::buses::update(state.pool(), id, payload).await?;
    Ok(Json(bus))
}

/// DELETE /api/buses/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = db::buses::delete(state.pool(), id).await?;
    Ok(Json(result))
}
