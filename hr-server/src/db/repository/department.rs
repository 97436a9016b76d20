//! Department Repository

use shared::models::{Department, DepartmentCreate, DepartmentUpdate, EntityMeta};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{RepoError, RepoResult, new_row_version};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Department>> {
    let departments = sqlx::query_as::<_, Department>(
        "SELECT id, name, description, row_version FROM departments ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(departments)
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(
        "SELECT id, name, description, row_version FROM departments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

pub async fn create(pool: &SqlitePool, data: DepartmentCreate) -> RepoResult<Department> {
    let department = Department {
        meta: EntityMeta::new(Uuid::new_v4(), new_row_version()),
        name: data.name,
        description: data.description,
    };

    sqlx::query("INSERT INTO departments (id, name, description, row_version) VALUES (?, ?, ?, ?)")
        .bind(department.meta.id)
        .bind(&department.name)
        .bind(&department.description)
        .bind(&department.meta.row_version)
        .execute(pool)
        .await?;

    Ok(department)
}

pub async fn update(
    pool: &SqlitePool,
    id: Uuid,
    data: DepartmentUpdate,
) -> RepoResult<Department> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound("Department".to_string()))?;

    // Compare-and-write: the UPDATE only matches while the stored token
    // still equals the one the client read.
    let next_version = new_row_version();
    let result = sqlx::query(
        "UPDATE departments SET name = ?, description = ?, row_version = ? \
         WHERE id = ? AND row_version = ?",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&next_version)
    .bind(id)
    .bind(&data.row_version)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        // The row existed a moment ago, so either the token is stale or the
        // row was deleted in between. Re-check to tell the two apart.
        return match find_by_id(pool, id).await? {
            Some(_) => Err(RepoError::Conflict),
            None => Err(RepoError::NotFound("Department".to_string())),
        };
    }

    Ok(Department {
        meta: EntityMeta::new(id, next_version),
        name: data.name,
        description: data.description,
    })
}

pub async fn delete(pool: &SqlitePool, id: Uuid) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound("Department".to_string()))?;

    let employees: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE department_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if employees > 0 {
        return Err(RepoError::InvalidReference(
            "Department has assigned employees and cannot be deleted".to_string(),
        ));
    }

    sqlx::query("DELETE FROM departments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(true)
}
