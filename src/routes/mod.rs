//! Route definitions

mod auth;
mod user;

pub use auth::auth_routes;
pub use user::user_routes;
