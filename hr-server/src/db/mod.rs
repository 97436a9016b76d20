//! Database Module
//!
//! SQLite connection pool, embedded schema migrations, and first-run
//! seeding. Repositories live in [`repository`].

pub mod repository;

use std::str::FromStr;

use shared::AppError;
use shared::models::{DepartmentCreate, EmployeeCreate};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};

/// Embedded schema migrations, applied on startup and by the test pools.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Database service holding the connection pool
#[derive(Debug, Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (creating if missing) the database at `db_path`, apply
    /// migrations, and return the ready pool.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        // Wait out short write contention instead of failing immediately.
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to set busy_timeout: {e}")))?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;

        tracing::info!(path = %db_path, "Database ready (WAL, busy_timeout=5000ms)");

        Ok(Self { pool })
    }
}

/// First-run bootstrap: when the employee table is empty, create a default
/// department and an admin account so the API is usable out of the box.
pub async fn seed_admin_if_empty(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if employees > 0 {
        return Ok(());
    }

    let department = repository::department::create(
        pool,
        DepartmentCreate {
            name: "General".to_string(),
            description: Some("Default department".to_string()),
        },
    )
    .await?;

    repository::employee::create(
        pool,
        EmployeeCreate {
            name: "Administrator".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            position: "Administrator".to_string(),
            hire_date: chrono::Utc::now(),
            is_admin: true,
            department_id: department.meta.id,
        },
    )
    .await?;

    tracing::info!(email = %email, "Seeded initial admin account");
    Ok(())
}

/// In-memory pool for tests.
///
/// Capped at one connection: each extra connection to `sqlite::memory:`
/// would otherwise open its own empty database.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("failed to enable foreign keys");

    MIGRATOR
        .run(&pool)
        .await
        .expect("failed to apply migrations");

    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_creates_admin_once() {
        let pool = test_pool().await;

        seed_admin_if_empty(&pool, "admin@example.com", "change-me-please")
            .await
            .unwrap();

        let admin = repository::employee::find_by_email(&pool, "admin@example.com")
            .await
            .unwrap()
            .expect("seed must create the admin account");
        assert!(admin.is_admin);

        let departments = repository::department::find_all(&pool).await.unwrap();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].name, "General");

        // Second run must be a no-op: the table is no longer empty.
        seed_admin_if_empty(&pool, "other@example.com", "change-me-please")
            .await
            .unwrap();
        let missing = repository::employee::find_by_email(&pool, "other@example.com")
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
