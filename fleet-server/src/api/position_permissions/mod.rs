//! Position-permission grant API module

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_permission;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/position-permissions", routes(state))
}

fn routes(state: &AppState) -> Router<AppState> {
    let read_routes = Router::new().route("/", get(handler::list));

    let manage_routes = Router::new()
        .route("/", put(handler::replace))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission("permissions:manage"),
        ));

    read_routes.merge(manage_routes)
}
