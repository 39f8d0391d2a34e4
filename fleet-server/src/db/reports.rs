//! Report Queries
//!
//! Pure reads over the schedule table; every request recomputes from
//! source rows. The monthly pivot is reshaped in the handler layer.

use super::RepoResult;
use shared::models::{RouteScheduleSummary, StopActivity};
use sqlx::SqlitePool;

/// One GROUP BY row of the monthly pivot: route x month
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MonthlyTripRow {
    pub route_id: i64,
    pub route_name: String,
    /// 1-12
    pub month: i64,
    pub trips: i64,
}

pub async fn schedule_summary(
    pool: &SqlitePool,
    start_date: &str,
    end_date: &str,
) -> RepoResult<Vec<RouteScheduleSummary>> {
    let rows = sqlx::query_as::<_, RouteScheduleSummary>(
        r#"
        SELECT s.route_id, r.name AS route_name,
               COUNT(*) AS trips,
               COUNT(DISTINCT s.bus_id) AS buses,
               COUNT(DISTINCT s.driver_id) AS drivers
        FROM schedule s
        JOIN route r ON r.id = s.route_id
        WHERE s.service_date >= ? AND s.service_date <= ?
        GROUP BY s.route_id, r.name
        ORDER BY r.name
        "#,
    )
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn monthly_trips(pool: &SqlitePool, year: i32) -> RepoResult<Vec<MonthlyTripRow>> {
    let rows = sqlx::query_as::<_, MonthlyTripRow>(
        r#"
        SELECT s.route_id, r.name AS route_name,
               CAST(strftime('%m', s.service_date) AS INTEGER) AS month,
               COUNT(*) AS trips
        FROM schedule s
        JOIN route r ON r.id = s.route_id
        WHERE strftime('%Y', s.service_date) = ?
        GROUP BY s.route_id, r.name, month
        ORDER BY r.name, month
        "#,
    )
    .bind(format!("{year:04}"))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn stop_activity(
    pool: &SqlitePool,
    start_date: &str,
    end_date: &str,
) -> RepoResult<Vec<StopActivity>> {
    let rows = sqlx::query_as::<_, StopActivity>(
        r#"
        SELECT rs.stop_id, st.name AS stop_name, COUNT(*) AS trips
        FROM schedule s
        JOIN route_stop rs ON rs.route_id = s.route_id
        JOIN stop st ON st.id = rs.stop_id
        WHERE s.service_date >= ? AND s.service_date <= ?
        GROUP BY rs.stop_id, st.name
        ORDER BY trips DESC, st.name
        "#,
    )
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
