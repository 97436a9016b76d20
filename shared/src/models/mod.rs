//! Data models
//!
//! Shared between hr-server and API consumers. DB row types use
//! `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`. All IDs are UUIDs
//! (stored as 16-byte BLOBs); every persisted row embeds [`EntityMeta`] for
//! its id and optimistic-concurrency version token.

pub mod auth;
pub mod department;
pub mod employee;
pub mod entity;

// Re-exports
pub use auth::*;
pub use department::*;
pub use employee::*;
pub use entity::*;
