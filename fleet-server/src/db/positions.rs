//! Position Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Position, PositionCreate, PositionUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const SELECT: &str =
    "SELECT id, printf('P%03d', id) AS formatted_id, name, created_at FROM position";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Position>> {
    let positions = sqlx::query_as::<_, Position>(&format!("{SELECT} ORDER BY name"))
        .fetch_all(pool)
        .await?;
    Ok(positions)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Position>> {
    let position = sqlx::query_as::<_, Position>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(position)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Position>> {
    let position = sqlx::query_as::<_, Position>(&format!("{SELECT} WHERE name = ? LIMIT 1"))
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(position)
}

pub async fn create(pool: &SqlitePool, data: PositionCreate) -> RepoResult<Position> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::PositionNameExists,
            format!("Position '{}' already exists", data.name),
        ));
    }

    let id: i64 =
        sqlx::query_scalar("INSERT INTO position (name, created_at) VALUES (?, ?) RETURNING id")
            .bind(&data.name)
            .bind(now_millis())
            .fetch_one(pool)
            .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create position".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: PositionUpdate) -> RepoResult<Position> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::PositionNotFound,
            format!("Position {id} not found"),
        ))?;

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && find_by_name(pool, new_name).await?.is_some()
    {
        return Err(RepoError::Business(
            ErrorCode::PositionNameExists,
            format!("Position '{new_name}' already exists"),
        ));
    }

    sqlx::query("UPDATE position SET name = COALESCE(?1, name) WHERE id = ?2")
        .bind(&data.name)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Position {id} not found")))
}

/// Delete a position and its grants.
///
/// Employees must be moved off the position first; grants are children of
/// the position and go with it, in one transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::PositionNotFound,
            format!("Position {id} not found"),
        ))?;

    let employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE position_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if employees > 0 {
        return Err(RepoError::Business(
            ErrorCode::PositionInUse,
            format!("Position is referenced by {employees} employee(s)"),
        ));
    }

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM position_permission WHERE position_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM position WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(true)
}
