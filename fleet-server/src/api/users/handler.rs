//! User-account API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_optional_text, validate_password};
use shared::error::AppResult;
use shared::models::{UserAccount, UserAccountUpdate};

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserAccount>>> {
    let accounts = db::employees::list_accounts(state.pool()).await?;
    Ok(Json(accounts))
}

/// PUT /api/users/:id - reset credentials, enable/disable
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserAccountUpdate>,
) -> AppResult<Json<UserAccount>> {
    validate_optional_text(&payload.username, "username", MAX_SHORT_TEXT_LEN)?;
    if let Some(ref password) = payload.password {
        validate_password(password)?;
    }

    let account = db::employees::update_account(state.pool(), id, payload).await?;
    Ok(Json(account))
}
