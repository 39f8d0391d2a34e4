//! Route Repository
//!
//! Routes own an ordered stop list (`route_stop`), bulk-replaced with the
//! same delete-then-insert transaction pattern as permission grants.

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Route, RouteCreate, RouteStop, RouteUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const SELECT: &str = r#"
SELECT id, printf('R%03d', id) AS formatted_id, name, description, is_active, created_at
FROM route
"#;

pub async fn find_all(pool: &SqlitePool, include_inactive: bool) -> RepoResult<Vec<Route>> {
    let sql = if include_inactive {
        format!("{SELECT} ORDER BY name")
    } else {
        format!("{SELECT} WHERE is_active = 1 ORDER BY name")
    };
    let routes = sqlx::query_as::<_, Route>(&sql).fetch_all(pool).await?;
    Ok(routes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Route>> {
    let route = sqlx::query_as::<_, Route>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(route)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Route>> {
    let route = sqlx::query_as::<_, Route>(&format!("{SELECT} WHERE name = ? LIMIT 1"))
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(route)
}

pub async fn create(pool: &SqlitePool, data: RouteCreate) -> RepoResult<Route> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::RouteNameExists,
            format!("Route '{}' already exists", data.name),
        ));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO route (name, description, is_active, created_at) VALUES (?, ?, 1, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create route".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: RouteUpdate) -> RepoResult<Route> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            RepoError::Business(ErrorCode::RouteNotFound, format!("Route {id} not found"))
        })?;

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && find_by_name(pool, new_name).await?.is_some()
    {
        return Err(RepoError::Business(
            ErrorCode::RouteNameExists,
            format!("Route '{new_name}' already exists"),
        ));
    }

    sqlx::query(
        r#"
        UPDATE route SET
            name = COALESCE(?1, name),
            description = COALESCE(?2, description),
            is_active = COALESCE(?3, is_active)
        WHERE id = ?4
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Route {id} not found")))
}

/// Delete a route and its stop list.
///
/// Schedules must be removed first; the stop list is owned by the route
/// and goes with it, in one transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            RepoError::Business(ErrorCode::RouteNotFound, format!("Route {id} not found"))
        })?;

    let trips: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedule WHERE route_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if trips > 0 {
        return Err(RepoError::Business(
            ErrorCode::RouteInService,
            format!("Route is referenced by {trips} schedule entries"),
        ));
    }

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM route_stop WHERE route_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM route WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(true)
}

// ── Ordered stop list ──

pub async fn find_stops(pool: &SqlitePool, route_id: i64) -> RepoResult<Vec<RouteStop>> {
    find_by_id(pool, route_id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::RouteNotFound,
            format!("Route {route_id} not found"),
        ))?;

    let stops = sqlx::query_as::<_, RouteStop>(
        r#"
        SELECT rs.stop_id, s.name AS stop_name, rs.seq
        FROM route_stop rs
        JOIN stop s ON s.id = rs.stop_id
        WHERE rs.route_id = ?
        ORDER BY rs.seq
        "#,
    )
    .bind(route_id)
    .fetch_all(pool)
    .await?;
    Ok(stops)
}

/// Replace the ordered stop list of a route.
///
/// Sequence numbers are assigned from list order (1-based). A stop may
/// appear only once per route.
pub async fn replace_stops(
    pool: &SqlitePool,
    route_id: i64,
    stop_ids: &[i64],
) -> RepoResult<Vec<RouteStop>> {
    find_by_id(pool, route_id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::RouteNotFound,
            format!("Route {route_id} not found"),
        ))?;

    let mut seen = std::collections::HashSet::new();
    for stop_id in stop_ids {
        if !seen.insert(*stop_id) {
            return Err(RepoError::Validation(format!(
                "Stop {stop_id} appears more than once"
            )));
        }
        super::stops::find_by_id(pool, *stop_id)
            .await?
            .ok_or_else(|| RepoError::Business(
                ErrorCode::StopNotFound,
                format!("Stop {stop_id} not found"),
            ))?;
    }

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM route_stop WHERE route_id = ?")
        .bind(route_id)
        .execute(&mut *tx)
        .await?;
    for (idx, stop_id) in stop_ids.iter().enumerate() {
        sqlx::query("INSERT INTO route_stop (route_id, stop_id, seq) VALUES (?, ?, ?)")
            .bind(route_id)
            .bind(stop_id)
            .bind((idx + 1) as i64)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    find_stops(pool, route_id).await
}
