//! Grant maintenance: replace-all round trips, isolation between
//! positions, and enforcement on manage routes.

mod common;

use common::{admin_token, login, request, setup};
use http::StatusCode;
use serde_json::{Value, json};
use std::collections::BTreeSet;

/// Map permission names to ids from the reference list.
async fn permission_ids(app: &axum::Router, token: &str, names: &[&str]) -> Vec<i64> {
    let (_, permissions) = request(app, "GET", "/api/permissions", Some(token), None).await;
    let permissions = permissions.as_array().unwrap().clone();
    names
        .iter()
        .map(|name| {
            permissions
                .iter()
                .find(|p| p["name"] == *name)
                .unwrap_or_else(|| panic!("permission {name} not seeded"))["id"]
                .as_i64()
                .unwrap()
        })
        .collect()
}

fn grant_names(grants: &Value) -> BTreeSet<String> {
    grants
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["permission_name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn replace_round_trips_exactly_and_idempotently() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (_, position) = request(
        &server.app,
        "POST",
        "/api/positions",
        Some(&token),
        Some(json!({ "name": "Dispatcher" })),
    )
    .await;
    let position_id = position["id"].as_i64().unwrap();

    let ids = permission_ids(&server.app, &token, &["routes:manage", "schedules:manage"]).await;
    let payload = json!({
        "positions": [{
            "position_id": position_id,
            "grants": [
                { "permission_id": ids[0] },
                { "permission_id": ids[1], "department_id": 1 }
            ]
        }]
    });

    let (status, _) = request(
        &server.app,
        "PUT",
        "/api/position-permissions",
        Some(&token),
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, grants) = request(
        &server.app,
        "GET",
        &format!("/api/position-permissions?position_id={position_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let expected: BTreeSet<String> =
        ["routes:manage", "schedules:manage"].iter().map(|s| s.to_string()).collect();
    assert_eq!(grant_names(&grants), expected);

    // Department scope is round-tripped
    let scoped = grants
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["permission_name"] == "schedules:manage")
        .unwrap();
    assert_eq!(scoped["department_id"], 1);

    // Re-submitting the same payload is a no-op
    let (status, _) = request(
        &server.app,
        "PUT",
        "/api/position-permissions",
        Some(&token),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, grants) = request(
        &server.app,
        "GET",
        &format!("/api/position-permissions?position_id={position_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(grants.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unsubmitted_positions_are_untouched() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (_, admin_grants_before) = request(
        &server.app,
        "GET",
        "/api/position-permissions?position_id=1",
        Some(&token),
        None,
    )
    .await;

    let (_, position) = request(
        &server.app,
        "POST",
        "/api/positions",
        Some(&token),
        Some(json!({ "name": "Clerk" })),
    )
    .await;
    let position_id = position["id"].as_i64().unwrap();

    let ids = permission_ids(&server.app, &token, &["reports:view"]).await;
    let (status, _) = request(
        &server.app,
        "PUT",
        "/api/position-permissions",
        Some(&token),
        Some(json!({
            "positions": [{ "position_id": position_id, "grants": [ { "permission_id": ids[0] } ] }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, admin_grants_after) = request(
        &server.app,
        "GET",
        "/api/position-permissions?position_id=1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(grant_names(&admin_grants_before), grant_names(&admin_grants_after));
}

#[tokio::test]
async fn unknown_references_reject_the_whole_replace() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (_, position) = request(
        &server.app,
        "POST",
        "/api/positions",
        Some(&token),
        Some(json!({ "name": "Auditor" })),
    )
    .await;
    let position_id = position["id"].as_i64().unwrap();

    // Unknown permission id
    let (status, _) = request(
        &server.app,
        "PUT",
        "/api/position-permissions",
        Some(&token),
        Some(json!({
            "positions": [{ "position_id": position_id, "grants": [ { "permission_id": 9999 } ] }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unknown position id
    let (status, _) = request(
        &server.app,
        "PUT",
        "/api/position-permissions",
        Some(&token),
        Some(json!({ "positions": [{ "position_id": 9999, "grants": [] }] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Nothing was written for the valid position
    let (_, grants) = request(
        &server.app,
        "GET",
        &format!("/api/position-permissions?position_id={position_id}"),
        Some(&token),
        None,
    )
    .await;
    assert!(grants.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn manage_routes_enforce_permissions_per_request() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    // Reports-only position and employee
    let (_, position) = request(
        &server.app,
        "POST",
        "/api/positions",
        Some(&token),
        Some(json!({ "name": "Viewer" })),
    )
    .await;
    let position_id = position["id"].as_i64().unwrap();

    let ids = permission_ids(&server.app, &token, &["reports:view"]).await;
    request(
        &server.app,
        "PUT",
        "/api/position-permissions",
        Some(&token),
        Some(json!({
            "positions": [{ "position_id": position_id, "grants": [ { "permission_id": ids[0] } ] }]
        })),
    )
    .await;

    request(
        &server.app,
        "POST",
        "/api/employees",
        Some(&token),
        Some(json!({
            "username": "viewer1",
            "password": "viewer1-password",
            "name": "Viewer One",
            "position_id": position_id,
            "department_id": 1
        })),
    )
    .await;

    let viewer_token = login(&server.app, "viewer1", "viewer1-password").await;

    // Reads are open to any authenticated user
    let (status, _) = request(&server.app, "GET", "/api/buses", Some(&viewer_token), None).await;
    assert_eq!(status, StatusCode::OK);

    // Manage routes are not
    let (status, _) = request(
        &server.app,
        "POST",
        "/api/buses",
        Some(&viewer_token),
        Some(json!({ "plate_number": "FL-900", "model": null, "capacity": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = request(
        &server.app,
        "PUT",
        "/api/position-permissions",
        Some(&viewer_token),
        Some(json!({ "positions": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn zero_grant_position_yields_empty_list_not_error() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (_, position) = request(
        &server.app,
        "POST",
        "/api/positions",
        Some(&token),
        Some(json!({ "name": "Trainee" })),
    )
    .await;
    let position_id = position["id"].as_i64().unwrap();

    request(
        &server.app,
        "POST",
        "/api/employees",
        Some(&token),
        Some(json!({
            "username": "trainee1",
            "password": "trainee1-password",
            "name": "Trainee One",
            "position_id": position_id,
            "department_id": 1
        })),
    )
    .await;

    let (status, body) = request(
        &server.app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "trainee1", "password": "trainee1-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["permissions"].as_array().unwrap().len(), 0);
}
