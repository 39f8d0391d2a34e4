//! Route Model

use serde::{Deserialize, Serialize};

/// Route entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Route {
    pub id: i64,
    /// Display-only id (`R003`), computed from the primary key
    pub formatted_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create route payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update route payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// One stop on a route, in sequence order (joined with the stop name)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RouteStop {
    pub stop_id: i64,
    pub stop_name: String,
    /// 1-based position along the route
    pub seq: i64,
}

/// Replace the ordered stop list of a route
///
/// Replace-all semantics: the submitted list becomes the route's stop
/// sequence; sequence numbers are assigned from list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStopsReplace {
    pub stop_ids: Vec<i64>,
}
