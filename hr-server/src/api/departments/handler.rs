//! Department API Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::db::repository::department;
use crate::utils::ValidatedJson;
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};
use shared::{ApiResponse, AppError, AppResult};

/// GET /api/department - list all departments
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Department>>> {
    let departments = department::find_all(state.get_pool()).await?;
    Ok(ApiResponse::success(departments))
}

/// GET /api/department/{id} - fetch a single department
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<Department>> {
    let department = department::find_by_id(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found("Department"))?;
    Ok(ApiResponse::success(department))
}

/// POST /api/department - create a department (Admin)
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<DepartmentCreate>,
) -> AppResult<(StatusCode, ApiResponse<Department>)> {
    let department = department::create(state.get_pool(), payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(department)))
}

/// PUT /api/department/{id} - full update, guarded by the row-version token (Admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<DepartmentUpdate>,
) -> AppResult<ApiResponse<Department>> {
    let department = department::update(state.get_pool(), id, payload).await?;
    Ok(ApiResponse::success(department))
}

/// DELETE /api/department/{id} - delete a department with no employees (Admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    department::delete(state.get_pool(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
