//! Authentication DTOs

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authenticated user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub position_id: i64,
    pub position_name: String,
    pub department_id: i64,
    pub department_name: String,
}

/// Login / refresh response
///
/// `permissions` is the position-derived snapshot for the UI; the server
/// re-derives grants from the database on every permission check and never
/// trusts this list back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
    pub permissions: Vec<String>,
}

/// Refresh response: fresh permission snapshot without a new token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub user: UserInfo,
    pub permissions: Vec<String>,
}
