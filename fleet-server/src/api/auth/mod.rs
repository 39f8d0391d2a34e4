//! Authentication API module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

/// Authentication router
/// - `/api/auth/login`: public (the auth middleware skips it by path)
/// - `/api/auth/refresh`, `/api/auth/me`, `/api/auth/logout`: protected
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/refresh", post(handler::refresh))
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/logout", post(handler::logout))
}
