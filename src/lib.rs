//! User-account web service library
//!
//! A minimal user CRUD service with bcrypt credential verification and
//! signed, time-limited session tokens.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
