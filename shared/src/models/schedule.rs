//! Schedule Model
//!
//! A schedule entry is a persisted (route, date, time, driver, bus) tuple;
//! there is no computed timetable.

use serde::{Deserialize, Serialize};

/// Schedule entry as returned by the API (joined row)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Schedule {
    pub id: i64,
    pub route_id: i64,
    pub route_name: String,
    pub bus_id: i64,
    pub bus_plate: String,
    pub driver_id: i64,
    pub driver_name: String,
    /// `YYYY-MM-DD`
    pub service_date: String,
    /// `HH:MM`, 24-hour
    pub departure_time: String,
    pub created_at: i64,
}

/// Create schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCreate {
    pub route_id: i64,
    pub bus_id: i64,
    pub driver_id: i64,
    /// `YYYY-MM-DD`
    pub service_date: String,
    /// `HH:MM`, 24-hour
    pub departure_time: String,
}

/// Update schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    pub route_id: Option<i64>,
    pub bus_id: Option<i64>,
    pub driver_id: Option<i64>,
    pub service_date: Option<String>,
    pub departure_time: Option<String>,
}
