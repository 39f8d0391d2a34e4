//! Permission reference-list API module
//!
//! Read-only: the list is seeded by migration and never mutated through
//! the API.

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/permissions", get(handler::list))
}
