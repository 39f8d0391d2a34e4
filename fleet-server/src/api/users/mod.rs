//! User-account API module
//!
//! The account-management view over employees: credentials and
//! enable/disable. Identity data (name, position, department) is managed
//! through `/api/employees`.

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_permission;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/users", routes(state))
}

fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", put(handler::update))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission("users:manage"),
        ))
}
