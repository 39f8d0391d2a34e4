//! Authentication handlers
//!
//! Login, permission-snapshot refresh, profile, logout.

use std::time::Duration;

use axum::{Json, extract::State};
use sqlx::SqlitePool;

use crate::auth::{CurrentUser, password};
use crate::security_log;
use crate::state::AppState;
use crate::db;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{LoginRequest, LoginResponse, SnapshotResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 200;

/// Build the permission snapshot for an employee: profile plus the
/// permission names currently granted to their position.
async fn build_snapshot(
    pool: &SqlitePool,
    employee_id: i64,
) -> AppResult<(UserInfo, Vec<String>)> {
    let employee = db::employees::find_by_id(pool, employee_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::EmployeeNotFound, "Employee no longer exists")
        })?;

    let permissions = db::permissions::names_for_position(pool, employee.position_id)
        .await
        .map_err(AppError::from)?;

    let user = UserInfo {
        id: employee.id,
        username: employee.username,
        name: employee.name,
        position_id: employee.position_id,
        position_name: employee.position_name,
        department_id: employee.department_id,
        department_name: employee.department_name,
    };

    Ok((user, permissions))
}

/// POST /api/auth/login
///
/// Authenticates credentials and returns a JWT plus the permission
/// snapshot. Unknown username and wrong password produce the same
/// response, after the same fixed delay.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = req.username.trim().to_string();

    let auth = db::employees::find_auth_by_username(state.pool(), &username)
        .await
        .map_err(AppError::from)?;

    // Fixed delay before inspecting the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let auth = match auth {
        Some(a) => a,
        None => {
            security_log!("WARN", "login_failed", username = username.clone(), reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    if !password::verify_password(&req.password, &auth.hash_pass) {
        security_log!("WARN", "login_failed", username = username.clone(), reason = "invalid_password");
        return Err(AppError::invalid_credentials());
    }

    if !auth.is_active {
        security_log!("WARN", "login_failed", username = username.clone(), reason = "account_disabled");
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    let (user, permissions) = build_snapshot(state.pool(), auth.id).await?;

    let token = state
        .jwt
        .generate_token(
            user.id,
            &user.username,
            &user.name,
            user.position_id,
            &user.position_name,
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    security_log!("INFO", "login_success", user_id = user.id, username = user.username.clone());
    tracing::info!(
        user_id = user.id,
        username = %user.username,
        position = %user.position_name,
        "User logged in"
    );

    Ok(Json(LoginResponse {
        token,
        user,
        permissions,
    }))
}

/// POST /api/auth/refresh
///
/// The explicit manual snapshot refresh: re-derives the permission list
/// from current grants. The token is unchanged.
pub async fn refresh(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<SnapshotResponse>> {
    let (user, permissions) = build_snapshot(state.pool(), user.id).await?;
    Ok(Json(SnapshotResponse { user, permissions }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<SnapshotResponse>> {
    let (user, permissions) = build_snapshot(state.pool(), user.id).await?;
    Ok(Json(SnapshotResponse { user, permissions }))
}

/// POST /api/auth/logout
///
/// Stateless: there is no server-side session to destroy. The client
/// clears its stored token; the endpoint exists as an acknowledgement
/// and an audit point.
pub async fn logout(user: CurrentUser) -> Json<serde_json::Value> {
    security_log!("INFO", "logout", user_id = user.id, username = user.username.clone());
    Json(serde_json::json!({ "message": "Logged out" }))
}
