//! Stop Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Stop, StopCreate, StopUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const SELECT: &str =
    "SELECT id, printf('S%03d', id) AS formatted_id, name, zone, created_at FROM stop";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Stop>> {
    let stops = sqlx::query_as::<_, Stop>(&format!("{SELECT} ORDER BY name"))
        .fetch_all(pool)
        .await?;
    Ok(stops)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Stop>> {
    let stop = sqlx::query_as::<_, Stop>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(stop)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Stop>> {
    let stop = sqlx::query_as::<_, Stop>(&format!("{SELECT} WHERE name = ? LIMIT 1"))
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(stop)
}

pub async fn create(pool: &SqlitePool, data: StopCreate) -> RepoResult<Stop> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::StopNameExists,
            format!("Stop '{}' already exists", data.name),
        ));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO stop (name, zone, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.zone)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create stop".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: StopUpdate) -> RepoResult<Stop> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            RepoError::Business(ErrorCode::StopNotFound, format!("Stop {id} not found"))
        })?;

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && find_by_name(pool, new_name).await?.is_some()
    {
        return Err(RepoError::Business(
            ErrorCode::StopNameExists,
            format!("Stop '{new_name}' already exists"),
        ));
    }

    sqlx::query("UPDATE stop SET name = COALESCE(?1, name), zone = COALESCE(?2, zone) WHERE id = ?3")
        .bind(&data.name)
        .bind(&data.zone)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Stop {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            RepoError::Business(ErrorCode::StopNotFound, format!("Stop {id} not found"))
        })?;

    let routes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM route_stop WHERE stop_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if routes > 0 {
        return Err(RepoError::Business(
            ErrorCode::StopInUse,
            format!("Stop is assigned to {routes} route(s)"),
        ));
    }

    sqlx::query("DELETE FROM stop WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}
