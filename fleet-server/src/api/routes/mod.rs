//! Route API module
//!
//! Route CRUD plus the ordered stop list (`/{id}/stops`).

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_permission;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/routes", routes(state))
}

fn routes(state: &AppState) -> Router<AppState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/stops", get(handler::list_stops));

    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route("/{id}", axum::routing::put(handler::update).delete(handler::delete))
        .route("/{id}/stops", axum::routing::put(handler::replace_stops))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission("routes:manage"),
        ));

    read_routes.merge(manage_routes)
}
