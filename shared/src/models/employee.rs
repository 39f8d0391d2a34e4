//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee as returned by the API (joined row, never contains the hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    /// Display-only id (`E003`), computed from the primary key
    pub formatted_id: String,
    pub username: String,
    pub name: String,
    pub phone: Option<String>,
    pub position_id: i64,
    pub position_name: String,
    pub department_id: i64,
    pub department_name: String,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub username: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub position_id: i64,
    pub department_id: i64,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub position_id: Option<i64>,
    pub department_id: Option<i64>,
    pub is_active: Option<bool>,
}

/// Account view over an employee (the `/api/users` resource)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub position_name: String,
    pub is_active: bool,
}

/// Account update payload: reset credentials, enable/disable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccountUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}
