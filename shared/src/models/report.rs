//! Report Models
//!
//! Read-only aggregates: flat table rows and pivot-style chart datasets.
//! Recomputed from source rows on every request, no caching.

use serde::{Deserialize, Serialize};

/// Flat summary row per route over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RouteScheduleSummary {
    pub route_id: i64,
    pub route_name: String,
    /// Scheduled trips in the range
    pub trips: i64,
    /// Distinct buses used
    pub buses: i64,
    /// Distinct drivers assigned
    pub drivers: i64,
}

/// Pivot dataset row: one route, twelve month buckets of trip counts
///
/// Reshaped in Rust from per-month GROUP BY rows; `months[0]` is January.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRouteTrips {
    pub route_id: i64,
    pub route_name: String,
    pub months: Vec<i64>,
}

/// Chart dataset row: scheduled trips passing one stop over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StopActivity {
    pub stop_id: i64,
    pub stop_name: String,
    pub trips: i64,
}
