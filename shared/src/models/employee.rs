//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::department::Department;
use super::entity::EntityMeta;

/// Employee storage row. Never serialized: the password hash must not leave
/// the server, so the wire representation is [`EmployeeResponse`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: EntityMeta,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub position: String,
    pub hire_date: DateTime<Utc>,
    pub is_admin: bool,
    pub department_id: Uuid,
}

/// Employee response (without password hash)
///
/// `department` is populated on reads and left null after writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    pub email: String,
    pub position: String,
    pub hire_date: DateTime<Utc>,
    pub is_admin: bool,
    pub department_id: Uuid,
    pub department: Option<Department>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            meta: e.meta,
            name: e.name,
            email: e.email,
            position: e.position,
            hire_date: e.hire_date,
            is_admin: e.is_admin,
            department_id: e.department_id,
            department: None,
        }
    }
}

impl EmployeeResponse {
    /// Attach the joined department
    pub fn with_department(mut self, department: Option<Department>) -> Self {
        self.department = department;
        self
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(
        min = 1,
        max = 150,
        message = "Position must be between 1 and 150 characters"
    ))]
    pub position: String,
    pub hire_date: DateTime<Utc>,
    pub is_admin: bool,
    pub department_id: Uuid,
}

/// Update employee payload (full-field replace + concurrency token)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(
        min = 1,
        max = 150,
        message = "Position must be between 1 and 150 characters"
    ))]
    pub position: String,
    pub hire_date: DateTime<Utc>,
    pub is_admin: bool,
    pub department_id: Uuid,
    #[validate(length(min = 1, message = "Row version is required"))]
    pub row_version: String,
}
