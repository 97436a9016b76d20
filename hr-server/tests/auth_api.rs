//! Login and authentication-boundary behavior over the full HTTP stack.

mod common;

use axum::http::StatusCode;
use common::{ADMIN_EMAIL, ADMIN_PASSWORD, STAFF_EMAIL, STAFF_PASSWORD, json_body, setup, text_body};
use serde_json::{Value, json};
use tower::ServiceExt;

#[tokio::test]
async fn login_returns_a_working_token() {
    let server = setup().await;

    let token = server.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert!(!token.is_empty());

    // The issued token must be accepted by a protected route.
    let res = server
        .request("GET", "/api/department", Some(&token), None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_envelope_has_data_and_null_error() {
    let server = setup().await;

    let res = server
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert!(body["data"]["authToken"].is_string());
    assert_eq!(body["errorMessage"], Value::Null);
}

#[tokio::test]
async fn login_with_unknown_email_is_404() {
    let server = setup().await;

    let res = server
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "ghost@example.com", "password": "whatever123" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = json_body(res).await;
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errorMessage"], "User not found");
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let server = setup().await;

    let res = server
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": ADMIN_EMAIL, "password": "not-the-password" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(res).await;
    assert_eq!(body["errorMessage"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_malformed_email_is_rejected_before_lookup() {
    let server = setup().await;

    let res = server
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "not-an-email", "password": "whatever123" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = json_body(res).await;
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "Validation failed");
    assert!(body["errors"]["email"].is_array());
}

#[tokio::test]
async fn protected_route_without_token_is_401() {
    let server = setup().await;

    let res = server.request("GET", "/api/department", None, None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(res).await;
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errorMessage"], "User is not authenticated");
}

#[tokio::test]
async fn protected_route_with_garbage_token_is_401() {
    let server = setup().await;

    let res = server
        .request("GET", "/api/employee", Some("not.a.jwt"), None)
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_expired_token_is_401() {
    let server = setup().await;
    let token = server.expired_admin_token();

    let res = server
        .request("GET", "/api/department", Some(&token), None)
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(res).await;
    assert_eq!(body["errorMessage"], "Authentication token has expired");
}

#[tokio::test]
async fn staff_can_read_but_not_mutate() {
    let server = setup().await;
    let token = server.staff_token();

    let res = server
        .request("GET", "/api/department", Some(&token), None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = server
        .request(
            "POST",
            "/api/department",
            Some(&token),
            Some(json!({ "name": "Forbidden Dept" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body = json_body(res).await;
    assert_eq!(body["errorMessage"], "Administrator role is required");
}

#[tokio::test]
async fn cors_preflight_skips_authentication() {
    let server = setup().await;

    let req = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/api/department")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = server.app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn ping_is_public() {
    let server = setup().await;

    let res = server.request("GET", "/api/ping", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(text_body(res).await, "ok");
}

#[tokio::test]
async fn health_reports_version_and_database() {
    let server = setup().await;

    let res = server.request("GET", "/health", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    let res = server.request("GET", "/health/detailed", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn client_request_id_is_echoed_on_the_response() {
    let server = setup().await;

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/api/ping")
        .header("x-request-id", "correlate-me-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = server.app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("x-request-id").unwrap(),
        "correlate-me-123"
    );
}

#[tokio::test]
async fn staff_login_works_end_to_end() {
    let server = setup().await;

    let token = server.login(STAFF_EMAIL, STAFF_PASSWORD).await;
    let res = server
        .request("GET", "/api/employee", Some(&token), None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
}
