//! Employee API Handlers
//!
//! Read responses carry the joined department; create and update answer
//! with the employee alone, matching what the write touched.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::db::repository::{department, employee};
use crate::utils::ValidatedJson;
use shared::models::{Department, EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use shared::{ApiResponse, AppError, AppResult};

/// GET /api/employee - list all employees with their departments
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<EmployeeResponse>>> {
    let pool = state.get_pool();
    let employees = employee::find_all(pool).await?;
    let departments: HashMap<Uuid, Department> = department::find_all(pool)
        .await?
        .into_iter()
        .map(|d| (d.meta.id, d))
        .collect();

    let employees = employees
        .into_iter()
        .map(|e| {
            let department = departments.get(&e.department_id).cloned();
            EmployeeResponse::from(e).with_department(department)
        })
        .collect();

    Ok(ApiResponse::success(employees))
}

/// GET /api/employee/{id} - fetch a single employee with their department
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<EmployeeResponse>> {
    let pool = state.get_pool();
    let employee = employee::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee"))?;
    let department = department::find_by_id(pool, employee.department_id).await?;

    Ok(ApiResponse::success(
        EmployeeResponse::from(employee).with_department(department),
    ))
}

/// POST /api/employee - create an employee (Admin)
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<EmployeeCreate>,
) -> AppResult<(StatusCode, ApiResponse<EmployeeResponse>)> {
    let employee = employee::create(state.get_pool(), payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success(EmployeeResponse::from(employee)),
    ))
}

/// PUT /api/employee/{id} - full update, guarded by the row-version token (Admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<EmployeeUpdate>,
) -> AppResult<ApiResponse<EmployeeResponse>> {
    let employee = employee::update(state.get_pool(), id, payload).await?;
    Ok(ApiResponse::success(EmployeeResponse::from(employee)))
}

/// DELETE /api/employee/{id} - delete an employee (Admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    employee::delete(state.get_pool(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
