//! Authentication service
//!
//! Ties credential verification and token issuance together behind a
//! single login policy. The account store is reached through the
//! [`AccountDirectory`] seam so the policy itself stays storage-agnostic.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::password::{verify_password, PasswordError};
use super::token::{issue_token, verify_token, TokenError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown identity or wrong secret. Deliberately one variant with
    /// one message: the caller must not be able to tell which it was.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    TokenInvalid(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Password error: {0}")]
    Password(String),
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid(msg) => AuthError::TokenInvalid(msg),
            TokenError::EncodingFailed(msg) => AuthError::Token(msg),
            TokenError::EmptyIdentity => {
                AuthError::Token("cannot issue a token for an empty identity".to_string())
            }
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        AuthError::Password(e.to_string())
    }
}

/// Well-formed bcrypt hash (same cost as real credentials) compared
/// against when an identity is unknown, so the lookup miss costs the
/// same as a wrong password and cannot be told apart by timing.
const UNKNOWN_IDENTITY_HASH: &str =
    "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// Stored credential for an identity, as resolved by the directory
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub identity: String,
    pub password_hash: String,
}

/// Resolves an identity to its stored credential record.
///
/// Implemented by the user repository; tests substitute an in-memory map.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn resolve_by_identity(
        &self,
        identity: &str,
    ) -> Result<Option<CredentialRecord>, AuthError>;
}

/// A freshly issued session token with its validity window
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    directory: Arc<dyn AccountDirectory>,
    secret_key: String,
    token_ttl_seconds: i64,
}

impl AuthService {
    /// Create a new AuthService.
    ///
    /// The signing secret is injected once here and never reloaded;
    /// rotating it invalidates all outstanding tokens.
    pub fn new(
        directory: Arc<dyn AccountDirectory>,
        secret_key: String,
        token_ttl_seconds: i64,
    ) -> Self {
        Self {
            directory,
            secret_key,
            token_ttl_seconds,
        }
    }

    /// Authenticate an identity/secret pair and issue a session token.
    ///
    /// Unknown identity and wrong secret both fail with
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, identity: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let record = match self.directory.resolve_by_identity(identity).await? {
            Some(record) => record,
            None => {
                let _ = verify_password(password, UNKNOWN_IDENTITY_HASH);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !verify_password(password, &record.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = issue_token(&record.identity, &self.secret_key, self.token_ttl_seconds)?;

        Ok(IssuedToken {
            access_token,
            expires_in: self.token_ttl_seconds,
        })
    }

    /// Verify a presented token and return the identity it is bound to.
    pub fn authenticate(&self, token: &str) -> Result<String, AuthError> {
        let claims = verify_token(token, &self.secret_key)?;
        Ok(claims.sub)
    }
}
