//! Authentication core
//!
//! - Password hashing and verification (bcrypt)
//! - Signed, time-limited session tokens (HS256 JWT)
//! - The login policy tying the two together

mod password;
mod service;
mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use service::{AccountDirectory, AuthError, AuthService, CredentialRecord, IssuedToken};
pub use token::{issue_token, verify_token, Claims, TokenError};
