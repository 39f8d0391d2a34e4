//! Reports API module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_permission;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/reports", routes(state))
}

fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/schedule-summary", get(handler::schedule_summary))
        .route("/monthly-trips", get(handler::monthly_trips))
        .route("/stop-activity", get(handler::stop_activity))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission("reports:view"),
        ))
}
