//! API routes
//!
//! One module per resource; each contributes a nested router. The auth
//! middleware wraps every `/api/` path except login; manage routes add a
//! permission layer of their own.

pub mod auth;
pub mod buses;
pub mod departments;
pub mod employees;
pub mod health;
pub mod permissions;
pub mod position_permissions;
pub mod positions;
pub mod reports;
pub mod routes;
pub mod schedules;
pub mod stops;
pub mod users;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::state::AppState;

/// Create the combined application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(departments::router(&state))
        .merge(positions::router(&state))
        .merge(employees::router(&state))
        .merge(users::router(&state))
        .merge(permissions::router())
        .merge(position_permissions::router(&state))
        .merge(buses::router(&state))
        .merge(stops::router(&state))
        .merge(routes::router(&state))
        .merge(schedules::router(&state))
        .merge(reports::router(&state))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
