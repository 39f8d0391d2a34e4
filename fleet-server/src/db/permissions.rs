//! Permission Repository
//!
//! The permission table is a static reference list seeded by migration;
//! only reads live here. Grant maintenance is in
//! [`position_permissions`](super::position_permissions).

use super::RepoResult;
use shared::models::Permission;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Permission>> {
    let permissions = sqlx::query_as::<_, Permission>(
        "SELECT id, name, description FROM permission ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(permissions)
}

/// Distinct permission names granted to a position, joined through the
/// grant table. This is the effective permission set: re-derived from
/// current grants on every call, never cached.
pub async fn names_for_position(pool: &SqlitePool, position_id: i64) -> RepoResult<Vec<String>> {
    let names: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT DISTINCT p.name
        FROM position_permission pp
        JOIN permission p ON p.id = pp.permission_id
        WHERE pp.position_id = ?
        ORDER BY p.name
        "#,
    )
    .bind(position_id)
    .fetch_all(pool)
    .await?;
    Ok(names)
}

/// Count how many of the given permission ids exist
pub async fn count_existing(pool: &SqlitePool, ids: &[i64]) -> RepoResult<i64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT COUNT(DISTINCT id) FROM permission WHERE id IN ({placeholders})");
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for id in ids {
        query = query.bind(id);
    }
    let count = query.fetch_one(pool).await?;
    Ok(count)
}
