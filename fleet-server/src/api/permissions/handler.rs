//! Permission reference-list handlers

use axum::{Json, extract::State};

use crate::db;
use crate::state::AppState;
use shared::error::AppResult;
use shared::models::Permission;

/// GET /api/permissions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Permission>>> {
    let permissions = db::permissions::find_all(state.pool()).await?;
    Ok(Json(permissions))
}
