//! Employee CRUD over HTTP: joined reads, credential handling, and the
//! version-token contract.

mod common;

use axum::http::StatusCode;
use common::{json_body, setup, text_body};
use serde_json::{Value, json};

fn new_hire(server: &common::TestServer, email: &str) -> Value {
    json!({
        "name": "Avery Quinn",
        "email": email,
        "password": "RocketPass99",
        "position": "Engineer",
        "hireDate": "2023-03-15T09:00:00Z",
        "isAdmin": false,
        "departmentId": server.department_id,
    })
}

#[tokio::test]
async fn create_returns_the_employee_without_credentials() {
    let server = setup().await;
    let token = server.admin_token();

    let res = server
        .request(
            "POST",
            "/api/employee",
            Some(&token),
            Some(new_hire(&server, "avery@example.com")),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let raw = text_body(res).await;
    // No password material in any spelling may reach the wire.
    assert!(!raw.to_lowercase().contains("password"));

    let body: Value = serde_json::from_str(&raw).unwrap();
    let created = &body["data"];
    assert_eq!(created["name"], "Avery Quinn");
    assert_eq!(created["email"], "avery@example.com");
    assert_eq!(created["position"], "Engineer");
    assert_eq!(created["isAdmin"], false);
    assert!(created["id"].is_string());
    assert!(created["rowVersion"].is_string());
    // Writes answer with the employee alone.
    assert_eq!(created["department"], Value::Null);
}

#[tokio::test]
async fn read_joins_the_department() {
    let server = setup().await;
    let token = server.admin_token();

    let uri = format!("/api/employee/{}", server.staff_id);
    let res = server.request("GET", &uri, Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    let employee = &body["data"];
    assert_eq!(employee["email"], common::STAFF_EMAIL);
    assert_eq!(
        employee["department"]["id"],
        employee["departmentId"],
        "joined department must match the foreign key"
    );
    assert_eq!(employee["department"]["name"], "Engineering");
}

#[tokio::test]
async fn list_joins_departments_for_every_row() {
    let server = setup().await;
    let token = server.admin_token();

    let res = server
        .request("GET", "/api/employee", Some(&token), None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    let employees = body["data"].as_array().unwrap();
    assert_eq!(employees.len(), 2);
    for employee in employees {
        assert_eq!(employee["department"]["name"], "Engineering");
    }
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let server = setup().await;
    let token = server.admin_token();

    let res = server
        .request(
            "POST",
            "/api/employee",
            Some(&token),
            Some(new_hire(&server, common::STAFF_EMAIL)),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = json_body(res).await;
    assert_eq!(body["errorMessage"], "Email address is already in use");
}

#[tokio::test]
async fn malformed_email_is_rejected_with_field_errors() {
    let server = setup().await;
    let token = server.admin_token();

    let res = server
        .request(
            "POST",
            "/api/employee",
            Some(&token),
            Some(new_hire(&server, "not-an-email")),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = json_body(res).await;
    assert_eq!(body["message"], "Validation failed");
    assert!(body["errors"]["email"].is_array());
}

#[tokio::test]
async fn short_password_is_rejected() {
    let server = setup().await;
    let token = server.admin_token();

    let mut payload = new_hire(&server, "shortpass@example.com");
    payload["password"] = json!("short");
    let res = server
        .request("POST", "/api/employee", Some(&token), Some(payload))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = json_body(res).await;
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
async fn unknown_department_is_rejected() {
    let server = setup().await;
    let token = server.admin_token();

    let mut payload = new_hire(&server, "nodept@example.com");
    payload["departmentId"] = json!("7f68e297-c20c-4b5a-a50d-0a9e587dcbc9");
    let res = server
        .request("POST", "/api/employee", Some(&token), Some(payload))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = json_body(res).await;
    assert_eq!(body["errorMessage"], "Department does not exist");
}

#[tokio::test]
async fn update_with_stale_token_is_409_and_keeps_the_winner() {
    let server = setup().await;
    let token = server.admin_token();

    let res = server
        .request(
            "POST",
            "/api/employee",
            Some(&token),
            Some(new_hire(&server, "contested@example.com")),
        )
        .await;
    let created = json_body(res).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let original = created["data"]["rowVersion"].as_str().unwrap().to_string();
    let uri = format!("/api/employee/{id}");

    let update = |position: &str, version: &str| {
        json!({
            "name": "Avery Quinn",
            "email": "contested@example.com",
            "password": "RocketPass99",
            "position": position,
            "hireDate": "2023-03-15T09:00:00Z",
            "isAdmin": false,
            "departmentId": server.department_id,
            "rowVersion": version,
        })
    };

    let res = server
        .request(
            "PUT",
            &uri,
            Some(&token),
            Some(update("Senior Engineer", &original)),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_ne!(body["data"]["rowVersion"].as_str().unwrap(), original);

    let res = server
        .request(
            "PUT",
            &uri,
            Some(&token),
            Some(update("Principal Engineer", &original)),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = json_body(res).await;
    assert_eq!(
        body["errorMessage"],
        "The record was modified by another user"
    );

    let body = json_body(server.request("GET", &uri, Some(&token), None).await).await;
    assert_eq!(body["data"]["position"], "Senior Engineer");
}

#[tokio::test]
async fn delete_removes_the_employee() {
    let server = setup().await;
    let token = server.admin_token();

    let res = server
        .request(
            "POST",
            "/api/employee",
            Some(&token),
            Some(new_hire(&server, "leaver@example.com")),
        )
        .await;
    let created = json_body(res).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/employee/{id}");

    let res = server.request("DELETE", &uri, Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = server.request("GET", &uri, Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = json_body(res).await;
    assert_eq!(body["errorMessage"], "Employee not found");
}

#[tokio::test]
async fn freshly_created_employee_can_log_in() {
    let server = setup().await;
    let token = server.admin_token();

    let res = server
        .request(
            "POST",
            "/api/employee",
            Some(&token),
            Some(new_hire(&server, "newstarter@example.com")),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let issued = server.login("newstarter@example.com", "RocketPass99").await;
    assert!(!issued.is_empty());
}
