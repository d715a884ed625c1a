//! Session token issuance and verification
//!
//! Tokens are self-contained HS256 JWTs binding an identity claim to an
//! expiry instant. The server keeps no session record: the token is the
//! only login state, and it dies by expiry, never by revocation.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token errors, kept distinct so callers can surface "expired" and
/// "invalid" differently.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Cannot issue a token for an empty identity")]
    EmptyIdentity,
}

/// Claims embedded in a session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the authenticated identity (email)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Issue a signed session token for an identity.
///
/// The expiry instant is `now + ttl_seconds`; there is no way to renew
/// a token short of a fresh issuance.
pub fn issue_token(identity: &str, secret: &str, ttl_seconds: i64) -> Result<String, TokenError> {
    if identity.is_empty() {
        return Err(TokenError::EmptyIdentity);
    }

    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_seconds);

    let claims = Claims {
        sub: identity.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::EncodingFailed(e.to_string()))
}

/// Verify and decode a session token.
///
/// # Returns
/// * `Ok(Claims)` if the signature authenticates and the token has not expired
/// * `Err(TokenError::Expired)` if signature-valid but past its window
/// * `Err(TokenError::Invalid)` for anything malformed, tampered, or foreign
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    // No clock leeway: the Valid -> Expired transition happens at the
    // claimed instant.
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(e.to_string()),
    })?;

    Ok(token_data.claims)
}
