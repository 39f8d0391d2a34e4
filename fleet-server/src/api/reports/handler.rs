//! Report API handlers
//!
//! Aggregate queries over schedules, reshaped into flat table rows or
//! pivot-style chart datasets. Pure reads, recomputed per request.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::db;
use crate::db::reports::MonthlyTripRow;
use crate::state::AppState;
use crate::utils::validation::parse_date;
use shared::error::{AppError, AppResult};
use shared::models::{MonthlyRouteTrips, RouteScheduleSummary, StopActivity};

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

fn validate_range(query: &DateRangeQuery) -> AppResult<()> {
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;
    if end < start {
        return Err(AppError::validation("end_date must not precede start_date"));
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/reports/schedule-summary?start_date=&end_date=
///
/// Flat table rows: per-route trip counts with distinct buses/drivers.
pub async fn schedule_summary(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<Vec<RouteScheduleSummary>>> {
    validate_range(&query)?;
    let rows =
        db::reports::schedule_summary(state.pool(), &query.start_date, &query.end_date).await?;
    Ok(Json(rows))
}

/// GET /api/reports/monthly-trips?year=
///
/// Pivot dataset keyed by route id: twelve month buckets per route.
pub async fn monthly_trips(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> AppResult<Json<Vec<MonthlyRouteTrips>>> {
    if !(2000..=2100).contains(&query.year) {
        return Err(AppError::validation(format!("Invalid year: {}", query.year)));
    }
    let rows = db::reports::monthly_trips(state.pool(), query.year).await?;
    Ok(Json(pivot_monthly(rows)))
}

/// GET /api/reports/stop-activity?start_date=&end_date=
///
/// Chart dataset keyed by stop id: trips passing each stop.
pub async fn stop_activity(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<Vec<StopActivity>>> {
    validate_range(&query)?;
    let rows =
        db::reports::stop_activity(state.pool(), &query.start_date, &query.end_date).await?;
    Ok(Json(rows))
}

// ============================================================================
// Reshaping
// ============================================================================

/// Pivot per-month GROUP BY rows into one row per route with twelve
/// month buckets. Input rows are ordered by route; months with no trips
/// stay zero.
fn pivot_monthly(rows: Vec<MonthlyTripRow>) -> Vec<MonthlyRouteTrips> {
    let mut result: Vec<MonthlyRouteTrips> = Vec::new();
    for row in rows {
        if row.month < 1 || row.month > 12 {
            continue;
        }
        let idx = match result.iter().position(|r| r.route_id == row.route_id) {
            Some(idx) => idx,
            None => {
                result.push(MonthlyRouteTrips {
                    route_id: row.route_id,
                    route_name: row.route_name.clone(),
                    months: vec![0; 12],
                });
                result.len() - 1
            }
        };
        result[idx].months[(row.month - 1) as usize] = row.trips;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(route_id: i64, name: &str, month: i64, trips: i64) -> MonthlyTripRow {
        MonthlyTripRow {
            route_id,
            route_name: name.to_string(),
            month,
            trips,
        }
    }

    #[test]
    fn test_pivot_groups_by_route() {
        let rows = vec![
            row(1, "Airport Express", 1, 10),
            row(1, "Airport Express", 3, 7),
            row(2, "Harbour Loop", 12, 4),
        ];
        let pivoted = pivot_monthly(rows);

        assert_eq!(pivoted.len(), 2);
        assert_eq!(pivoted[0].route_id, 1);
        assert_eq!(pivoted[0].months[0], 10);
        assert_eq!(pivoted[0].months[2], 7);
        assert_eq!(pivoted[0].months[1], 0);
        assert_eq!(pivoted[1].months[11], 4);
    }

    #[test]
    fn test_pivot_ignores_bad_months() {
        let pivoted = pivot_monthly(vec![row(1, "X", 0, 5), row(1, "X", 13, 5)]);
        assert!(pivoted.is_empty());
    }

    #[test]
    fn test_pivot_empty() {
        assert!(pivot_monthly(Vec::new()).is_empty());
    }
}
