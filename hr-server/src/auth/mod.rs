//! Authentication Module
//!
//! JWT authentication and role gating:
//! - [`JwtService`] - token issue and validation
//! - [`CurrentUser`] - authenticated user context
//! - [`require_auth`] / [`require_admin`] - Axum middleware
//! - [`password`] - Argon2 password hashing

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{
    Claims, CurrentUser, JwtConfig, JwtError, JwtService, ROLE_ADMIN, ROLE_EMPLOYEE,
};
pub use middleware::{require_admin, require_auth};
