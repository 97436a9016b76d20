//! Server Error Types
//!
//! Startup and lifecycle errors. API-level errors are [`shared::AppError`];
//! this type never crosses the HTTP boundary.

use thiserror::Error;

/// Server-level errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] shared::AppError),

    #[error("JWT configuration error: {0}")]
    Jwt(#[from] crate::auth::JwtError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ServerError>;
