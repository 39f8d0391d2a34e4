//! Stop Model

use serde::{Deserialize, Serialize};

/// Stop entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Stop {
    pub id: i64,
    /// Display-only id (`S003`), computed from the primary key
    pub formatted_id: String,
    pub name: String,
    pub zone: Option<String>,
    pub created_at: i64,
}

/// Create stop payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopCreate {
    pub name: String,
    pub zone: Option<String>,
}

/// Update stop payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopUpdate {
    pub name: Option<String>,
    pub zone: Option<String>,
}
