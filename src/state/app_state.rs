//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::repository::UserRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub repository: UserRepository,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>, repository: UserRepository) -> Self {
        Self {
            auth_service,
            repository,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for UserRepository {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.repository.clone()
    }
}
