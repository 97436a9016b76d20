//! Employee Repository
//!
//! Passwords are hashed here so that plaintext never reaches the table and
//! handlers never see a hash.

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, EntityMeta};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{RepoError, RepoResult, new_row_version};
use crate::auth::password;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, password_hash, position, hire_date, is_admin, department_id, row_version \
         FROM employees ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, password_hash, position, hire_date, is_admin, department_id, row_version \
         FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, password_hash, position, hire_date, is_admin, department_id, row_version \
         FROM employees WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let password_hash = password::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

    let employee = Employee {
        meta: EntityMeta::new(Uuid::new_v4(), new_row_version()),
        name: data.name,
        email: data.email,
        password_hash,
        position: data.position,
        hire_date: data.hire_date,
        is_admin: data.is_admin,
        department_id: data.department_id,
    };

    sqlx::query(
        "INSERT INTO employees (id, name, email, password_hash, position, hire_date, is_admin, department_id, row_version) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(employee.meta.id)
    .bind(&employee.name)
    .bind(&employee.email)
    .bind(&employee.password_hash)
    .bind(&employee.position)
    .bind(employee.hire_date)
    .bind(employee.is_admin)
    .bind(employee.department_id)
    .bind(&employee.meta.row_version)
    .execute(pool)
    .await
    .map_err(map_constraints)?;

    Ok(employee)
}

pub async fn update(pool: &SqlitePool, id: Uuid, data: EmployeeUpdate) -> RepoResult<Employee> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound("Employee".to_string()))?;

    let password_hash = password::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

    let next_version = new_row_version();
    let result = sqlx::query(
        "UPDATE employees SET name = ?, email = ?, password_hash = ?, position = ?, hire_date = ?, \
         is_admin = ?, department_id = ?, row_version = ? \
         WHERE id = ? AND row_version = ?",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&password_hash)
    .bind(&data.position)
    .bind(data.hire_date)
    .bind(data.is_admin)
    .bind(data.department_id)
    .bind(&next_version)
    .bind(id)
    .bind(&data.row_version)
    .execute(pool)
    .await
    .map_err(map_constraints)?;

    if result.rows_affected() == 0 {
        return match find_by_id(pool, id).await? {
            Some(_) => Err(RepoError::Conflict),
            None => Err(RepoError::NotFound("Employee".to_string())),
        };
    }

    Ok(Employee {
        meta: EntityMeta::new(id, next_version),
        name: data.name,
        email: data.email,
        password_hash,
        position: data.position,
        hire_date: data.hire_date,
        is_admin: data.is_admin,
        department_id: data.department_id,
    })
}

pub async fn delete(pool: &SqlitePool, id: Uuid) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound("Employee".to_string()))?;

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(true)
}

/// Rewrite raw constraint violations into messages a client can act on.
fn map_constraints(err: sqlx::Error) -> RepoError {
    match RepoError::from(err) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate("Email address is already in use".to_string())
        }
        RepoError::InvalidReference(_) => {
            RepoError::InvalidReference("Department does not exist".to_string())
        }
        other => other,
    }
}
