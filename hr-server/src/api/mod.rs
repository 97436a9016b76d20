//! API Route Modules
//!
//! # Structure
//!
//! - [`health`] - liveness ping and health checks
//! - [`auth`] - login
//! - [`departments`] - department management
//! - [`employees`] - employee management

pub mod auth;
pub mod departments;
pub mod employees;
pub mod health;
