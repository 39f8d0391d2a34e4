//! Department API module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_permission;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/departments", routes(state))
}

fn routes(state: &AppState) -> Router<AppState> {
    // Read routes: any authenticated user (reference data backs most forms)
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route("/{id}", axum::routing::put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission("departments:manage"),
        ));

    read_routes.merge(manage_routes)
}
