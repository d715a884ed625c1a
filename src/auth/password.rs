//! Password hashing and verification
//!
//! Secrets are stored only as salted bcrypt hashes. Hashing the same
//! secret twice yields different strings (the salt), but verification
//! against any hash produced here is deterministic.

use bcrypt::DEFAULT_COST;
use thiserror::Error;

/// Password hashing errors
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),
}

/// Hash a plaintext password for storage.
///
/// The plaintext never leaves this function; only the resulting hash
/// is persisted.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    bcrypt::hash(password, DEFAULT_COST).map_err(|e| PasswordError::HashFailed(e.to_string()))
}

/// Check a plaintext password against a stored hash.
///
/// Never errors: a malformed stored hash simply fails the comparison.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    bcrypt::verify(password, stored_hash).unwrap_or(false)
}
