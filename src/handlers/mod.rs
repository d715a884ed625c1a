//! API handlers

pub mod auth;
pub mod user;

// Re-export AuthenticatedUser from middleware for handler use
pub use crate::middleware::auth::AuthenticatedUser;
