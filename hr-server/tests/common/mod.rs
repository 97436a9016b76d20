//! Shared test harness: in-memory database, seeded accounts, and request
//! helpers that drive the complete middleware stack.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use hr_server::auth::{JwtConfig, JwtService, ROLE_ADMIN, ROLE_EMPLOYEE};
use hr_server::db::{DbService, MIGRATOR, repository};
use hr_server::routes::build_app;
use hr_server::{Config, ServerState};
use shared::models::{DepartmentCreate, EmployeeCreate};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "AdminPass123";
pub const STAFF_EMAIL: &str = "staff@example.com";
pub const STAFF_PASSWORD: &str = "StaffPass123";

const TEST_JWT_SECRET: &str = "integration-test-signing-key-0123456789";

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiration_minutes: 60,
        issuer: "hr-server".to_string(),
        audience: "hr-clients".to_string(),
    }
}

/// A fully wired application over an in-memory database, seeded with one
/// department, one admin, and one regular employee.
pub struct TestServer {
    pub app: Router,
    pub state: ServerState,
    pub department_id: Uuid,
    pub admin_id: Uuid,
    pub staff_id: Uuid,
}

pub async fn setup() -> TestServer {
    // One connection only: every further connection to sqlite::memory:
    // would open its own empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("failed to enable foreign keys");

    MIGRATOR
        .run(&pool)
        .await
        .expect("failed to apply migrations");

    let department = repository::department::create(
        &pool,
        DepartmentCreate {
            name: "Engineering".to_string(),
            description: Some("Product engineering".to_string()),
        },
    )
    .await
    .unwrap();

    let admin = repository::employee::create(
        &pool,
        EmployeeCreate {
            name: "Seed Admin".to_string(),
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            position: "Administrator".to_string(),
            hire_date: Utc.with_ymd_and_hms(2020, 1, 6, 9, 0, 0).unwrap(),
            is_admin: true,
            department_id: department.meta.id,
        },
    )
    .await
    .unwrap();

    let staff = repository::employee::create(
        &pool,
        EmployeeCreate {
            name: "Seed Staff".to_string(),
            email: STAFF_EMAIL.to_string(),
            password: STAFF_PASSWORD.to_string(),
            position: "Engineer".to_string(),
            hire_date: Utc.with_ymd_and_hms(2022, 7, 18, 9, 0, 0).unwrap(),
            is_admin: false,
            department_id: department.meta.id,
        },
    )
    .await
    .unwrap();

    let state = ServerState::from_parts(
        Config::default(),
        DbService { pool },
        JwtService::with_config(test_jwt_config()),
    );
    let app = build_app(&state).with_state(state.clone());

    TestServer {
        app,
        state,
        department_id: department.meta.id,
        admin_id: admin.meta.id,
        staff_id: staff.meta.id,
    }
}

impl TestServer {
    /// Send one request through the full app (middleware included).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Log in through the API and return the issued token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let res = self
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = json_body(res).await;
        body["data"]["authToken"].as_str().unwrap().to_string()
    }

    /// Mint a valid admin token directly, skipping the login delay.
    pub fn admin_token(&self) -> String {
        self.state
            .get_jwt_service()
            .generate_token(self.admin_id, ADMIN_EMAIL, ROLE_ADMIN)
            .unwrap()
    }

    /// Mint a valid non-admin token directly.
    pub fn staff_token(&self) -> String {
        self.state
            .get_jwt_service()
            .generate_token(self.staff_id, STAFF_EMAIL, ROLE_EMPLOYEE)
            .unwrap()
    }

    /// Mint a token that expired well past the validation leeway.
    pub fn expired_admin_token(&self) -> String {
        let service = JwtService::with_config(JwtConfig {
            expiration_minutes: -5,
            ..test_jwt_config()
        });
        service
            .generate_token(self.admin_id, ADMIN_EMAIL, ROLE_ADMIN)
            .unwrap()
    }
}

/// Collect a response body and parse it as JSON.
pub async fn json_body(res: Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn text_body(res: Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
