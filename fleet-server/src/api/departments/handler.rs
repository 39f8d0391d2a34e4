//! Department API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};

/// GET /api/departments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = db::departments::find_all(state.pool()).await?;
    Ok(Json(departments))
}

/// GET /api/departments/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Department>> {
    let department = db::departments::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::DepartmentNotFound, format!("Department {id} not found"))
        })?;
    Ok(Json(department))
}

/// POST /api/departments
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let department = db::departments::create(state.pool(), payload).await?;
    Ok(Json(department))
}

/// PUT /api/departments/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    let department = db::departments::update(state.pool(), id, payload).await?;
    Ok(Json(department))
}

/// DELETE /api/departments/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = db::departments::delete(state.pool(), id).await?;
    Ok(Json(result))
}
