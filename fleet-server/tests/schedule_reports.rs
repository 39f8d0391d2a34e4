//! Schedules and the report endpoints built over them.

mod common;

use axum::Router;
use common::{admin_token, request, setup};
use http::StatusCode;
use serde_json::{Value, json};

/// Seed a small network: two routes with stops, one bus, one driver,
/// and schedule entries across two months. Returns
/// (route_ids, stop_ids, bus_id, driver_id).
async fn seed_network(app: &Router, token: &str) -> (Vec<i64>, Vec<i64>, i64, i64) {
    let mut route_ids = Vec::new();
    for (name, description) in [
        ("Airport Express", "Terminal loop"),
        ("Harbour Loop", "Waterfront circuit"),
    ] {
        let (status, route) = request(
            app,
            "POST",
            "/api/routes",
            Some(token),
            Some(json!({ "name": name, "description": description })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        route_ids.push(route["id"].as_i64().unwrap());
    }

    let mut stop_ids = Vec::new();
    for name in ["Central Station", "Airport T1", "Harbour Gate"] {
        let (status, stop) = request(
            app,
            "POST",
            "/api/stops",
            Some(token),
            Some(json!({ "name": name, "zone": "A" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        stop_ids.push(stop["id"].as_i64().unwrap());
    }

    // Airport Express: Central -> Airport; Harbour Loop: Central -> Harbour
    let (status, _) = request(
        app,
        "PUT",
        &format!("/api/routes/{}/stops", route_ids[0]),
        Some(token),
        Some(json!({ "stop_ids": [stop_ids[0], stop_ids[1]] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(
        app,
        "PUT",
        &format!("/api/routes/{}/stops", route_ids[1]),
        Some(token),
        Some(json!({ "stop_ids": [stop_ids[0], stop_ids[2]] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, bus) = request(
        app,
        "POST",
        "/api/buses",
        Some(token),
        Some(json!({ "plate_number": "FL-101", "model": "Citaro", "capacity": 60 })),
    )
    .await;
    let bus_id = bus["id"].as_i64().unwrap();

    let (_, driver) = request(
        app,
        "POST",
        "/api/employees",
        Some(token),
        Some(json!({
            "username": "driver-main",
            "password": "driver-main-pass",
            "name": "Main Driver",
            "position_id": 1,
            "department_id": 1
        })),
    )
    .await;
    let driver_id = driver["id"].as_i64().unwrap();

    // Trips: 2 on Airport Express in January, 1 in March, 1 on Harbour Loop in January
    for (route_id, date, time) in [
        (route_ids[0], "2026-01-10", "06:30"),
        (route_ids[0], "2026-01-17", "06:30"),
        (route_ids[0], "2026-03-02", "07:15"),
        (route_ids[1], "2026-01-12", "09:00"),
    ] {
        let (status, _) = request(
            app,
            "POST",
            "/api/schedules",
            Some(token),
            Some(json!({
                "route_id": route_id,
                "bus_id": bus_id,
                "driver_id": driver_id,
                "service_date": date,
                "departure_time": time
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    (route_ids, stop_ids, bus_id, driver_id)
}

fn rows<'a>(value: &'a Value) -> &'a Vec<Value> {
    value.as_array().expect("array response")
}

#[tokio::test]
async fn schedule_list_joins_and_filters() {
    let server = setup().await;
    let token = admin_token(&server.app).await;
    let (route_ids, _, _, _) = seed_network(&server.app, &token).await;

    let (status, all) = request(&server.app, "GET", "/api/schedules", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&all).len(), 4);
    assert_eq!(rows(&all)[0]["route_name"], "Airport Express");
    assert_eq!(rows(&all)[0]["bus_plate"], "FL-101");
    assert_eq!(rows(&all)[0]["driver_name"], "Main Driver");

    // Filter by route
    let (_, filtered) = request(
        &server.app,
        "GET",
        &format!("/api/schedules?route_id={}", route_ids[1]),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(rows(&filtered).len(), 1);

    // Filter by date range
    let (_, filtered) = request(
        &server.app,
        "GET",
        "/api/schedules?start_date=2026-02-01&end_date=2026-12-31",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(rows(&filtered).len(), 1);
    assert_eq!(rows(&filtered)[0]["service_date"], "2026-03-02");

    // Invalid date format is a validation failure
    let (status, _) = request(
        &server.app,
        "GET",
        "/api/schedules?start_date=02/01/2026",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn schedule_rejects_unknown_references_and_bad_times() {
    let server = setup().await;
    let token = admin_token(&server.app).await;
    let (route_ids, _, bus_id, driver_id) = seed_network(&server.app, &token).await;

    let (status, _) = request(
        &server.app,
        "POST",
        "/api/schedules",
        Some(&token),
        Some(json!({
            "route_id": 9999,
            "bus_id": bus_id,
            "driver_id": driver_id,
            "service_date": "2026-01-01",
            "departure_time": "08:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &server.app,
        "POST",
        "/api/schedules",
        Some(&token),
        Some(json!({
            "route_id": route_ids[0],
            "bus_id": bus_id,
            "driver_id": driver_id,
            "service_date": "2026-01-01",
            "departure_time": "25:99"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn route_stop_list_replaces_in_order() {
    let server = setup().await;
    let token = admin_token(&server.app).await;
    let (route_ids, stop_ids, _, _) = seed_network(&server.app, &token).await;

    let (status, stops) = request(
        &server.app,
        "GET",
        &format!("/api/routes/{}/stops", route_ids[0]),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let seqs: Vec<i64> = rows(&stops).iter().map(|s| s["seq"].as_i64().unwrap()).collect();
    assert_eq!(seqs, vec![1, 2]);

    // Reverse the order
    let (status, reversed) = request(
        &server.app,
        "PUT",
        &format!("/api/routes/{}/stops", route_ids[0]),
        Some(&token),
        Some(json!({ "stop_ids": [stop_ids[1], stop_ids[0]] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&reversed)[0]["stop_id"], stop_ids[1]);
    assert_eq!(rows(&reversed)[1]["stop_id"], stop_ids[0]);

    // A stop may appear only once
    let (status, _) = request(
        &server.app,
        "PUT",
        &format!("/api/routes/{}/stops", route_ids[0]),
        Some(&token),
        Some(json!({ "stop_ids": [stop_ids[0], stop_ids[0]] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A stop on a route cannot be deleted
    let (status, _) = request(
        &server.app,
        "DELETE",
        &format!("/api/stops/{}", stop_ids[0]),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn referenced_fleet_entities_cannot_be_deleted() {
    let server = setup().await;
    let token = admin_token(&server.app).await;
    let (route_ids, _, bus_id, driver_id) = seed_network(&server.app, &token).await;

    for uri in [
        format!("/api/routes/{}", route_ids[0]),
        format!("/api/buses/{bus_id}"),
        format!("/api/employees/{driver_id}"),
    ] {
        let (status, body) = request(&server.app, "DELETE", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::CONFLICT, "{uri}: {body}");
    }
}

#[tokio::test]
async fn schedule_summary_aggregates_per_route() {
    let server = setup().await;
    let token = admin_token(&server.app).await;
    seed_network(&server.app, &token).await;

    let (status, summary) = request(
        &server.app,
        "GET",
        "/api/reports/schedule-summary?start_date=2026-01-01&end_date=2026-01-31",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let summary = rows(&summary);
    assert_eq!(summary.len(), 2);
    let airport = summary.iter().find(|r| r["route_name"] == "Airport Express").unwrap();
    assert_eq!(airport["trips"], 2);
    assert_eq!(airport["buses"], 1);
    assert_eq!(airport["drivers"], 1);

    // Reversed range is a validation failure
    let (status, _) = request(
        &server.app,
        "GET",
        "/api/reports/schedule-summary?start_date=2026-02-01&end_date=2026-01-01",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn monthly_trips_pivot_is_keyed_by_route() {
    let server = setup().await;
    let token = admin_token(&server.app).await;
    let (route_ids, _, _, _) = seed_network(&server.app, &token).await;

    let (status, pivot) = request(
        &server.app,
        "GET",
        "/api/reports/monthly-trips?year=2026",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let pivot = rows(&pivot);
    assert_eq!(pivot.len(), 2);
    let airport = pivot.iter().find(|r| r["route_id"] == route_ids[0]).unwrap();
    let months = airport["months"].as_array().unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], 2); // January
    assert_eq!(months[2], 1); // March
    assert_eq!(months[5], 0);

    // A year with no schedules pivots to an empty dataset
    let (status, empty) = request(
        &server.app,
        "GET",
        "/api/reports/monthly-trips?year=2020",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(rows(&empty).is_empty());
}

#[tokio::test]
async fn stop_activity_counts_trips_through_each_stop() {
    let server = setup().await;
    let token = admin_token(&server.app).await;
    let (_, stop_ids, _, _) = seed_network(&server.app, &token).await;

    let (status, activity) = request(
        &server.app,
        "GET",
        "/api/reports/stop-activity?start_date=2026-01-01&end_date=2026-12-31",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let activity = rows(&activity);
    // Central Station is on both routes: all 4 trips pass it
    let central = activity.iter().find(|s| s["stop_id"] == stop_ids[0]).unwrap();
    assert_eq!(central["trips"], 4);
    // Airport T1 only sees Airport Express trips
    let airport = activity.iter().find(|s| s["stop_id"] == stop_ids[1]).unwrap();
    assert_eq!(airport["trips"], 3);
    // Ordered by traffic
    assert_eq!(activity[0]["stop_id"], stop_ids[0]);
}
