//! Department Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::EntityMeta;

/// Department entity (row and wire representation are identical)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: EntityMeta,
    pub name: String,
    pub description: Option<String>,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreate {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: String,
    #[validate(length(max = 250, message = "Description must be at most 250 characters"))]
    pub description: Option<String>,
}

/// Update department payload (full-field replace + concurrency token)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: String,
    #[validate(length(max = 250, message = "Description must be at most 250 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Row version is required"))]
    pub row_version: String,
}
