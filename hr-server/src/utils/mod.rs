//! Utility Module
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - the [`ValidatedJson`] request extractor

pub mod logger;
pub mod validation;

pub use validation::{ValidatedJson, ValidatedJsonRejection};
