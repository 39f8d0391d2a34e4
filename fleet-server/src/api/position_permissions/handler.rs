//! Position-permission grant handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::db;
use crate::state::AppState;
use shared::error::AppResult;
use shared::models::{GrantReplaceRequest, GrantRow};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub position_id: Option<i64>,
}

/// GET /api/position-permissions?position_id=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<GrantRow>>> {
    let grants = match query.position_id {
        Some(position_id) => {
            db::position_permissions::find_for_position(state.pool(), position_id).await?
        }
        None => db::position_permissions::find_all(state.pool()).await?,
    };
    Ok(Json(grants))
}

/// PUT /api/position-permissions
///
/// Replace-all per submitted position, one transaction. Returns the new
/// grant rows of the submitted positions.
pub async fn replace(
    State(state): State<AppState>,
    Json(payload): Json<GrantReplaceRequest>,
) -> AppResult<Json<Vec<GrantRow>>> {
    let position_ids: Vec<i64> = payload.positions.iter().map(|p| p.position_id).collect();

    db::position_permissions::replace(state.pool(), payload).await?;

    let mut grants = Vec::new();
    for position_id in position_ids {
        grants.extend(
            db::position_permissions::find_for_position(state.pool(), position_id).await?,
        );
    }
    Ok(Json(grants))
}
