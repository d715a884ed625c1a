//! Authentication HTTP handlers

use axum::{extract::State, Json};

use super::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, UserResponse};
use crate::state::AppState;

/// POST /auth/login - Authenticate and receive a session token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let issued = state.auth_service.login(&req.email, &req.password).await?;

    // Stamp the login after the credential check succeeded. A failure
    // here must not take back the already-issued token.
    if let Err(e) = state.repository.record_login(&req.email).await {
        tracing::warn!(error = %e, "Failed to record login timestamp");
    }

    Ok(Json(LoginResponse {
        access_token: issued.access_token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in,
    }))
}

/// GET /auth/me - Get the currently authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .repository
        .find_by_email(&user.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
