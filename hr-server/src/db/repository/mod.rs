//! Repository Layer
//!
//! CRUD operations over the SQLite pool, written as free functions per
//! entity module. Optimistic concurrency lives here: every row carries an
//! opaque `row_version` token, and updates replace it with a conditional
//! `UPDATE ... WHERE id = ? AND row_version = ?` so that two writers racing
//! on the same row resolve to exactly one winner.

pub mod department;
pub mod employee;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use shared::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Repository error types
#[derive(Error, Debug)]
pub enum RepoError {
    /// Row does not exist. Carries the resource noun, e.g. "Department".
    #[error("{0} not found")]
    NotFound(String),

    /// Row version mismatch: another writer replaced the row first.
    #[error("The record was modified by another user")]
    Conflict,

    /// Unique-constraint violation.
    #[error("{0}")]
    Duplicate(String),

    /// Foreign-key violation or a reference that would be left dangling.
    #[error("{0}")]
    InvalidReference(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate("Value already exists".to_string());
            }
            if db_err.is_foreign_key_violation() {
                return RepoError::InvalidReference(
                    "Referenced record does not exist".to_string(),
                );
            }
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(resource) => AppError::not_found(resource),
            RepoError::Conflict => AppError::conflict(),
            RepoError::Duplicate(msg) => AppError::validation(msg),
            RepoError::InvalidReference(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Mint a fresh row-version token.
///
/// Tokens are random (UUIDv4 bytes, base64-encoded), not sequential.
/// Clients must echo them back byte-for-byte; nothing may be read into
/// their contents.
pub(crate) fn new_row_version() -> String {
    BASE64.encode(Uuid::new_v4().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_version_tokens_are_unique() {
        let a = new_row_version();
        let b = new_row_version();
        assert_ne!(a, b);
    }

    #[test]
    fn test_row_version_is_base64() {
        let token = new_row_version();
        let bytes = BASE64.decode(&token).expect("token must be valid base64");
        assert_eq!(bytes.len(), 16);
    }

    #[test]
    fn test_not_found_maps_to_resource_message() {
        let err = AppError::from(RepoError::NotFound("Department".to_string()));
        assert_eq!(err.code, shared::ErrorCode::NotFound);
        assert_eq!(err.message, "Department not found");
    }

    #[test]
    fn test_conflict_maps_to_conflict_code() {
        let err = AppError::from(RepoError::Conflict);
        assert_eq!(err.code, shared::ErrorCode::Conflict);
        assert_eq!(err.message, "The record was modified by another user");
    }

    #[test]
    fn test_duplicate_maps_to_validation() {
        let err = AppError::from(RepoError::Duplicate("Email already in use".to_string()));
        assert_eq!(err.code, shared::ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Email already in use");
    }
}
