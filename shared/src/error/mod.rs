//! Unified error system for the HR API
//!
//! - [`ErrorCode`]: numeric error codes, grouped by range
//! - [`ErrorCategory`]: classification derived from the code range
//! - [`AppError`]: the error type handlers return; maps mechanically to an
//!   HTTP status and the response envelope
//! - [`ApiResponse`]: the `{data, errorMessage}` envelope every endpoint uses
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! // Error with the default message for its code
//! let err = AppError::new(ErrorCode::Conflict);
//!
//! // Error with a custom message
//! let err = AppError::not_found("Department");
//! assert_eq!(err.message, "Department not found");
//!
//! // Success envelope
//! let ok = ApiResponse::success(42);
//! assert_eq!(ok.data, Some(42));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
