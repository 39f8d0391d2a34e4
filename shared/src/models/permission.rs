//! Permission Model (RBAC reference list and grants)

use serde::{Deserialize, Serialize};

/// Named capability flag, seeded by migration (static reference list)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Permission {
    pub id: i64,
    /// Permission name, `module:verb` convention (e.g. `employees:manage`)
    pub name: String,
    pub description: Option<String>,
}

/// A grant row as returned by the API (joined with the permission name)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GrantRow {
    pub position_id: i64,
    pub permission_id: i64,
    pub permission_name: String,
    /// Optional department scope; persisted and round-tripped, not evaluated
    pub department_id: Option<i64>,
}

/// One grant entry in a replace payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantEntry {
    pub permission_id: i64,
    #[serde(default)]
    pub department_id: Option<i64>,
}

/// The full grant set for one position
///
/// Replace-all semantics: saving this set deletes every existing grant for
/// `position_id` and inserts `grants` in its place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionGrantSet {
    pub position_id: i64,
    #[serde(default)]
    pub grants: Vec<GrantEntry>,
}

/// Replace request covering one or more positions
///
/// Positions absent from `positions` are unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantReplaceRequest {
    pub positions: Vec<PositionGrantSet>,
}
