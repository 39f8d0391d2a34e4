//! Position Model

use serde::{Deserialize, Serialize};

/// Position entity (job role, reference data)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Position {
    pub id: i64,
    /// Display-only id (`P003`), computed from the primary key
    pub formatted_id: String,
    pub name: String,
    pub created_at: i64,
}

/// Create position payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionCreate {
    pub name: String,
}

/// Update position payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub name: Option<String>,
}
