//! CRUD contracts: formatted ids, duplicate-key conflicts, usage-checked
//! deletes, and the account view.

mod common;

use common::{admin_token, request, setup};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn department_create_returns_formatted_id_and_lists_once() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (status, body) = request(
        &server.app,
        "POST",
        "/api/departments",
        Some(&token),
        Some(json!({ "name": "Finance" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = body["id"].as_i64().unwrap();
    let formatted = body["formatted_id"].as_str().unwrap();
    assert_eq!(formatted, format!("D{id:03}"));

    let (status, list) = request(&server.app, "GET", "/api/departments", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let matches = list
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["name"] == "Finance")
        .count();
    assert_eq!(matches, 1);
}

#[tokio::test]
async fn duplicate_names_conflict_on_every_resource() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    for (uri, payload) in [
        ("/api/departments", json!({ "name": "Maintenance" })),
        ("/api/positions", json!({ "name": "Mechanic" })),
        ("/api/stops", json!({ "name": "Central Station" })),
        ("/api/routes", json!({ "name": "Night Line" })),
        (
            "/api/buses",
            json!({ "plate_number": "FL-204", "model": "Citaro", "capacity": 60 }),
        ),
    ] {
        let (status, _) = request(&server.app, "POST", uri, Some(&token), Some(payload.clone())).await;
        assert_eq!(status, StatusCode::OK, "first create on {uri}");

        let (status, body) =
            request(&server.app, "POST", uri, Some(&token), Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT, "duplicate on {uri}: {body}");
    }
}

#[tokio::test]
async fn validation_failures_are_400() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (status, _) = request(
        &server.app,
        "POST",
        "/api/departments",
        Some(&token),
        Some(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &server.app,
        "POST",
        "/api/buses",
        Some(&token),
        Some(json!({ "plate_number": "FL-1", "model": null, "capacity": -3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_and_delete_missing_resources_are_404() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (status, _) = request(
        &server.app,
        "PUT",
        "/api/departments/9999",
        Some(&token),
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&server.app, "DELETE", "/api/buses/9999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn referenced_department_and_position_cannot_be_deleted() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    // The seeded admin employee references department 1 / position 1
    let (status, body) =
        request(&server.app, "DELETE", "/api/departments/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    let (status, body) =
        request(&server.app, "DELETE", "/api/positions/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
}

#[tokio::test]
async fn employee_update_and_self_delete_guard() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (_, emp) = request(
        &server.app,
        "POST",
        "/api/employees",
        Some(&token),
        Some(json!({
            "username": "inspector1",
            "password": "inspector-pass",
            "name": "Inspector",
            "phone": "555-0100",
            "position_id": 1,
            "department_id": 1
        })),
    )
    .await;
    let id = emp["id"].as_i64().unwrap();
    assert_eq!(emp["formatted_id"], format!("E{id:03}"));
    assert_eq!(emp["position_name"], "Administrator");

    // Partial update keeps unchanged fields
    let (status, updated) = request(
        &server.app,
        "PUT",
        &format!("/api/employees/{id}"),
        Some(&token),
        Some(json!({ "phone": "555-0199" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["phone"], "555-0199");
    assert_eq!(updated["username"], "inspector1");

    // Admin (id 1) cannot delete itself
    let (status, _) = request(&server.app, "DELETE", "/api/employees/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Deleting the inspector works
    let (status, _) = request(
        &server.app,
        "DELETE",
        &format!("/api/employees/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The hash never leaves the API
    let (_, list) = request(&server.app, "GET", "/api/employees", Some(&token), None).await;
    for employee in list.as_array().unwrap() {
        assert!(employee.get("hash_pass").is_none());
        assert!(employee.get("password").is_none());
    }
}

#[tokio::test]
async fn account_view_lists_and_resets_credentials() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (status, accounts) = request(&server.app, "GET", "/api/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let accounts = accounts.as_array().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["username"], "admin");
    assert_eq!(accounts[0]["position_name"], "Administrator");

    // Reset the admin password through the account view, then login with it
    let (status, _) = request(
        &server.app,
        "PUT",
        "/api/users/1",
        Some(&token),
        Some(json!({ "password": "rotated-password-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    common::login(&server.app, "admin", "rotated-password-1").await;
}

#[tokio::test]
async fn inactive_employees_hidden_unless_requested() {
    let server = setup().await;
    let token = admin_token(&server.app).await;

    let (_, emp) = request(
        &server.app,
        "POST",
        "/api/employees",
        Some(&token),
        Some(json!({
            "username": "seasonal",
            "password": "seasonal-pass",
            "name": "Seasonal Driver",
            "position_id": 1,
            "department_id": 1
        })),
    )
    .await;
    let id = emp["id"].as_i64().unwrap();

    let (status, _) = request(
        &server.app,
        "PUT",
        &format!("/api/employees/{id}"),
        Some(&token),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = request(&server.app, "GET", "/api/employees", Some(&token), None).await;
    assert!(
        list.as_array()
            .unwrap()
            .iter()
            .all(|e| e["username"] != "seasonal")
    );

    let (_, list) = request(
        &server.app,
        "GET",
        "/api/employees?include_inactive=true",
        Some(&token),
        None,
    )
    .await;
    assert!(
        list.as_array()
            .unwrap()
            .iter()
            .any(|e| e["username"] == "seasonal")
    );
}
