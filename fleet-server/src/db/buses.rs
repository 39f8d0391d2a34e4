//! Bus Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Bus, BusCreate, BusUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const SELECT: &str = r#"
SELECT id, printf('B%03d', id) AS formatted_id, plate_number, model, capacity, is_active, created_at
FROM bus
"#;

pub async fn find_all(pool: &SqlitePool, include_inactive: bool) -> RepoResult<Vec<Bus>> {
    let sql = if include_inactive {
        format!("{SELECT} ORDER BY plate_number")
    } else {
        format!("{SELECT} WHERE is_active = 1 ORDER BY plate_number")
    };
    let buses = sqlx::query_as::<_, Bus>(&sql).fetch_all(pool).await?;
    Ok(buses)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Bus>> {
    let bus = sqlx::query_as::<_, Bus>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(bus)
}

pub async fn find_by_plate(pool: &SqlitePool, plate_number: &str) -> RepoResult<Option<Bus>> {
    let bus = sqlx::query_as::<_, Bus>(&format!("{SELECT} WHERE plate_number = ? LIMIT 1"))
        .bind(plate_number)
        .fetch_optional(pool)
        .await?;
    Ok(bus)
}

pub async fn create(pool: &SqlitePool, data: BusCreate) -> RepoResult<Bus> {
    if find_by_plate(pool, &data.plate_number).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::PlateNumberExists,
            format!("Plate number '{}' already exists", data.plate_number),
        ));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO bus (plate_number, model, capacity, is_active, created_at) VALUES (?, ?, ?, 1, ?) RETURNING id",
    )
    .bind(&data.plate_number)
    .bind(&data.model)
    .bind(data.capacity)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create bus".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: BusUpdate) -> RepoResult<Bus> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            RepoError::Business(ErrorCode::BusNotFound, format!("Bus {id} not found"))
        })?;

    if let Some(ref new_plate) = data.plate_number
        && new_plate != &existing.plate_number
        && find_by_plate(pool, new_plate).await?.is_some()
    {
        return Err(RepoError::Business(
            ErrorCode::PlateNumberExists,
            format!("Plate number '{new_plate}' already exists"),
        ));
    }

    sqlx::query(
        r#"
        UPDATE bus SET
            plate_number = COALESCE(?1, plate_number),
            model = COALESCE(?2, model),
            capacity = COALESCE(?3, capacity),
            is_active = COALESCE(?4, is_active)
        WHERE id = ?5
        "#,
    )
    .bind(&data.plate_number)
    .bind(&data.model)
    .bind(data.capacity)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Bus {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            RepoError::Business(ErrorCode::BusNotFound, format!("Bus {id} not found"))
        })?;

    let trips: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedule WHERE bus_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if trips > 0 {
        return Err(RepoError::Business(
            ErrorCode::BusInService,
            format!("Bus is referenced by {trips} schedule entries"),
        ));
    }

    sqlx::query("DELETE FROM bus WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}
