//! Schedule Repository
//!
//! Schedule entries are plain (route, date, time, driver, bus) tuples;
//! nothing is computed, the table is the timetable.

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Schedule, ScheduleCreate, ScheduleUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const SELECT: &str = r#"
SELECT s.id, s.route_id, r.name AS route_name,
       s.bus_id, b.plate_number AS bus_plate,
       s.driver_id, e.name AS driver_name,
       s.service_date, s.departure_time, s.created_at
FROM schedule s
JOIN route r ON r.id = s.route_id
JOIN bus b ON b.id = s.bus_id
JOIN employee e ON e.id = s.driver_id
"#;

/// List filter: all optional, combined with AND
#[derive(Debug, Default, Clone)]
pub struct ScheduleFilter {
    pub route_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn find_all(pool: &SqlitePool, filter: ScheduleFilter) -> RepoResult<Vec<Schedule>> {
    let mut sql = format!("{SELECT} WHERE 1 = 1");
    if filter.route_id.is_some() {
        sql.push_str(" AND s.route_id = ?");
    }
    if filter.start_date.is_some() {
        sql.push_str(" AND s.service_date >= ?");
    }
    if filter.end_date.is_some() {
        sql.push_str(" AND s.service_date <= ?");
    }
    sql.push_str(" ORDER BY s.service_date, s.departure_time, r.name");

    let mut query = sqlx::query_as::<_, Schedule>(&sql);
    if let Some(route_id) = filter.route_id {
        query = query.bind(route_id);
    }
    if let Some(ref start) = filter.start_date {
        query = query.bind(start.clone());
    }
    if let Some(ref end) = filter.end_date {
        query = query.bind(end.clone());
    }

    let schedules = query.fetch_all(pool).await?;
    Ok(schedules)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Schedule>> {
    let schedule = sqlx::query_as::<_, Schedule>(&format!("{SELECT} WHERE s.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(schedule)
}

async fn check_references(
    pool: &SqlitePool,
    route_id: Option<i64>,
    bus_id: Option<i64>,
    driver_id: Option<i64>,
) -> RepoResult<()> {
    if let Some(route_id) = route_id {
        super::routes::find_by_id(pool, route_id)
            .await?
            .ok_or_else(|| RepoError::Business(
                ErrorCode::RouteNotFound,
                format!("Route {route_id} not found"),
            ))?;
    }
    if let Some(bus_id) = bus_id {
        super::buses::find_by_id(pool, bus_id)
            .await?
            .ok_or_else(|| RepoError::Business(
                ErrorCode::BusNotFound,
                format!("Bus {bus_id} not found"),
            ))?;
    }
    if let Some(driver_id) = driver_id {
        super::employees::find_by_id(pool, driver_id)
            .await?
            .ok_or_else(|| RepoError::Business(
                ErrorCode::EmployeeNotFound,
                format!("Employee {driver_id} not found"),
            ))?;
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, data: ScheduleCreate) -> RepoResult<Schedule> {
    check_references(pool, Some(data.route_id), Some(data.bus_id), Some(data.driver_id)).await?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO schedule (route_id, bus_id, driver_id, service_date, departure_time, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(data.route_id)
    .bind(data.bus_id)
    .bind(data.driver_id)
    .bind(&data.service_date)
    .bind(&data.departure_time)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create schedule entry".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ScheduleUpdate) -> RepoResult<Schedule> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::ScheduleNotFound,
            format!("Schedule entry {id} not found"),
        ))?;

    check_references(pool, data.route_id, data.bus_id, data.driver_id).await?;

    sqlx::query(
        r#"
        UPDATE schedule SET
            route_id = COALESCE(?1, route_id),
            bus_id = COALESCE(?2, bus_id),
            driver_id = COALESCE(?3, driver_id),
            service_date = COALESCE(?4, service_date),
            departure_time = COALESCE(?5, departure_time)
        WHERE id = ?6
        "#,
    )
    .bind(data.route_id)
    .bind(data.bus_id)
    .bind(data.driver_id)
    .bind(&data.service_date)
    .bind(&data.departure_time)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Schedule entry {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM schedule WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::ScheduleNotFound,
            format!("Schedule entry {id} not found"),
        ));
    }
    Ok(true)
}
