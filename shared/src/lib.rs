//! Shared types for the HR management API
//!
//! Everything that crosses the HTTP boundary lives here so the server and
//! any Rust consumer agree on one definition:
//!
//! - **Models** (`models`): entity rows, request payloads, and response DTOs
//! - **Errors** (`error`): error codes, [`AppError`], and the response envelope
//!
//! DB row derives (`sqlx::FromRow`) are gated behind the `db` feature so
//! client-side consumers don't pull in sqlx.

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    Department, DepartmentCreate, DepartmentUpdate, Employee, EmployeeCreate, EmployeeResponse,
    EmployeeUpdate, EntityMeta, LoginRequest, TokenResponse,
};
