//! Bus Model

use serde::{Deserialize, Serialize};

/// Bus entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Bus {
    pub id: i64,
    /// Display-only id (`B003`), computed from the primary key
    pub formatted_id: String,
    pub plate_number: String,
    pub model: Option<String>,
    pub capacity: i64,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create bus payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusCreate {
    pub plate_number: String,
    pub model: Option<String>,
    pub capacity: i64,
}

/// Update bus payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusUpdate {
    pub plate_number: Option<String>,
    pub model: Option<String>,
    pub capacity: Option<i64>,
    pub is_active: Option<bool>,
}
