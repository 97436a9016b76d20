//! Authentication Handlers

use std::time::Duration;

use axum::extract::State;

use crate::auth::{ROLE_ADMIN, ROLE_EMPLOYEE, password};
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::ValidatedJson;
use shared::models::{LoginRequest, TokenResponse};
use shared::{ApiResponse, AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login - exchange credentials for a bearer token
///
/// Unknown email answers 404, wrong password 401. Both paths share the
/// same fixed delay so response timing does not separate them.
pub async fn login(
    State(state): State<ServerState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AppResult<ApiResponse<TokenResponse>> {
    let user = employee::find_by_email(state.get_pool(), &req.email).await?;

    // Delay before acting on the lookup result.
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(user) => user,
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::not_found("User"));
        }
    };

    let password_valid = password::verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        tracing::warn!(email = %req.email, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let role = if user.is_admin { ROLE_ADMIN } else { ROLE_EMPLOYEE };
    let token = state
        .get_jwt_service()
        .generate_token(user.meta.id, &user.email, role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(email = %user.email, role = %role, "Login succeeded");

    Ok(ApiResponse::success(TokenResponse { auth_token: token }))
}
