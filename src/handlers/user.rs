//! User CRUD HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::hash_password;
use crate::error::ApiError;
use crate::models::{RegisterRequest, UpdateUserRequest, UserResponse};
use crate::state::AppState;

/// POST /users/register - Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()?;

    if state.repository.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    if state
        .repository
        .find_by_nickname(&req.nickname)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "User with this nickname already exists".to_string(),
        ));
    }

    let password_hash =
        hash_password(&req.password).map_err(|e| ApiError::InternalError(e.to_string()))?;

    let user = state
        .repository
        .create_user(
            &req.nickname,
            &req.email,
            &password_hash,
            vec!["user".to_string()],
        )
        .await?;

    tracing::info!(nickname = %user.nickname, "User registered");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users - List all users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.repository.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/:nickname - Look up a user by nickname
pub async fn get_user(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .repository
        .find_by_nickname(&nickname)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

/// PUT /users/:nickname - Update a user's email
pub async fn update_user(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()?;

    let user = match req.email {
        Some(new_email) => state.repository.update_email(&nickname, &new_email).await?,
        // Nothing to change; still 404 if the user is unknown.
        None => state.repository.find_by_nickname(&nickname).await?,
    }
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

/// DELETE /users/:nickname - Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = state.repository.delete_by_nickname(&nickname).await?;

    if !removed {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    tracing::info!(nickname = %nickname, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
