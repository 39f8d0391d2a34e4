//! Route API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Route, RouteCreate, RouteStop, RouteStopsReplace, RouteUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/routes
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Route>>> {
    let routes = db::routes::find_all(state.pool(), query.include_inactive).await?;
    Ok(Json(routes))
}

/// GET /api/routes/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Route>> {
    let route = db::routes::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::RouteNotFound, format!("Route {id} not found"))
        })?;
    Ok(Json(route))
}

/// POST /api/routes
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<RouteCreate>,
) -> AppResult<Json<Route>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    let route = db::routes::create(state.pool(), payload).await?;
    Ok(Json(route))
}

/// PUT /api/routes/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RouteUpdate>,
) -> AppResult<Json<Route>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    let route = db::routes::update(state.pool(), id, payload).await?;
    Ok(Json(route))
}

/// DELETE /api/routes/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = db::routes::delete(state.pool(), id).await?;
    Ok(Json(result))
}

/// GET /api/routes/:id/stops - the ordered stop list
pub async fn list_stops(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<RouteStop>>> {
    let stops = db::routes::find_stops(state.pool(), id).await?;
    Ok(Json(stops))
}

/// PUT /api/routes/:id/stops - replace the ordered stop list
pub async fn replace_stops(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RouteStopsReplace>,
) -> AppResult<Json<Vec<RouteStop>>> {
    let stops = db::routes::replace_stops(state.pool(), id, &payload.stop_ids).await?;
    Ok(Json(stops))
}
