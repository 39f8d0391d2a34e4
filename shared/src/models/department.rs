//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity (organisational unit, reference data)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    pub id: i64,
    /// Display-only id (`D003`), computed from the primary key
    pub formatted_id: String,
    pub name: String,
    pub created_at: i64,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
}

/// Update department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
}
