//! Employee API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::db;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_password,
    validate_required_text,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/employees
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = db::employees::find_all(state.pool(), query.include_inactive).await?;
    Ok(Json(employees))
}

/// GET /api/employees/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = db::employees::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
        })?;
    Ok(Json(employee))
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    validate_required_text(&payload.username, "username", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_password(&payload.password)?;

    let employee = db::employees::create(state.pool(), payload).await?;
    Ok(Json(employee))
}

/// PUT /api/employees/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    validate_optional_text(&payload.username, "username", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    if let Some(ref password) = payload.password {
        validate_password(password)?;
    }

    let employee = db::employees::update(state.pool(), id, payload).await?;
    Ok(Json(employee))
}

/// DELETE /api/employees/:id
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if user.id == id {
        return Err(AppError::new(ErrorCode::EmployeeCannotDeleteSelf));
    }
    let result = db::employees::delete(state.pool(), id).await?;
    Ok(Json(result))
}
