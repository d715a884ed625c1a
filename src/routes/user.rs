//! User route definitions

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::user;
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(user::register))
        .route("/users", get(user::list_users))
        .route("/users/:nickname", get(user::get_user))
        .route("/users/:nickname", put(user::update_user))
        .route("/users/:nickname", delete(user::delete_user))
}
