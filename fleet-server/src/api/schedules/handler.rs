//! Schedule API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::db;
use crate::db::schedules::ScheduleFilter;
use crate::state::AppState;
use crate::utils::validation::{parse_date, parse_departure_time};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Schedule, ScheduleCreate, ScheduleUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub route_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/schedules?route_id=&start_date=&end_date=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Schedule>>> {
    if let Some(ref date) = query.start_date {
        parse_date(date)?;
    }
    if let Some(ref date) = query.end_date {
        parse_date(date)?;
    }

    let filter = ScheduleFilter {
        route_id: query.route_id,
        start_date: query.start_date,
        end_date: query.end_date,
    };
    let schedules = db::schedules::find_all(state.pool(), filter).await?;
    Ok(Json(schedules))
}

/// GET /api/schedules/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Schedule>> {
    let schedule = db::schedules::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ScheduleNotFound,
                format!("Schedule entry {id} not found"),
            )
        })?;
    Ok(Json(schedule))
}

/// POST /api/schedules
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleCreate>,
) -> AppResult<Json<Schedule>> {
    parse_date(&payload.service_date)?;
    parse_departure_time(&payload.departure_time)?;

    let schedule = db::schedules::create(state.pool(), payload).await?;
    Ok(Json(schedule))
}

/// PUT /api/schedules/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ScheduleUpdate>,
) -> AppResult<Json<Schedule>> {
    if let Some(ref date) = payload.service_date {
        parse_date(date)?;
    }
    if let Some(ref time) = payload.departure_time {
        parse_departure_time(time)?;
    }

    let schedule = db::schedules::update(state.pool(), id, payload).await?;
    Ok(Json(schedule))
}

/// DELETE /api/schedules/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = db::schedules::delete(state.pool(), id).await?;
    Ok(Json(result))
}
