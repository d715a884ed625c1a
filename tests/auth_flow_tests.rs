//! End-to-end tests for the authentication core
//!
//! Exercises the login policy against an in-memory account directory,
//! the way handlers exercise it against the Postgres-backed repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use userhub_server::auth::{
    hash_password, issue_token, verify_password, verify_token, AccountDirectory, AuthError,
    AuthService, CredentialRecord, TokenError,
};

const SECRET: &str = "integration-secret";

/// In-memory directory standing in for the user repository
struct MapDirectory {
    records: HashMap<String, CredentialRecord>,
}

impl MapDirectory {
    fn new(entries: &[(&str, &str)]) -> Self {
        let records = entries
            .iter()
            .map(|(identity, password)| {
                (
                    identity.to_string(),
                    CredentialRecord {
                        identity: identity.to_string(),
                        password_hash: hash_password(password).unwrap(),
                    },
                )
            })
            .collect();
        Self { records }
    }
}

#[async_trait]
impl AccountDirectory for MapDirectory {
    async fn resolve_by_identity(
        &self,
        identity: &str,
    ) -> Result<Option<CredentialRecord>, AuthError> {
        Ok(self.records.get(identity).cloned())
    }
}

fn service_with_ttl(ttl_seconds: i64) -> AuthService {
    let directory = Arc::new(MapDirectory::new(&[("alice@example.com", "correct-secret")]));
    AuthService::new(directory, SECRET.to_string(), ttl_seconds)
}

// ============================================================================
// Login flow
// ============================================================================

#[tokio::test]
async fn login_then_authenticate_returns_identity() {
    let service = service_with_ttl(7200);

    let issued = service
        .login("alice@example.com", "correct-secret")
        .await
        .expect("login with correct credentials should succeed");

    assert_eq!(issued.expires_in, 7200);

    let identity = service
        .authenticate(&issued.access_token)
        .expect("freshly issued token should authenticate");
    assert_eq!(identity, "alice@example.com");
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() {
    let service = service_with_ttl(7200);

    let wrong = service
        .login("alice@example.com", "wrong-secret")
        .await
        .unwrap_err();
    let unknown = service.login("bob@nowhere.com", "anything").await.unwrap_err();

    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert_eq!(wrong.to_string(), unknown.to_string());
}

#[tokio::test]
async fn token_from_one_service_is_foreign_to_another_key() {
    let service = service_with_ttl(7200);
    let issued = service
        .login("alice@example.com", "correct-secret")
        .await
        .unwrap();

    let other = AuthService::new(
        Arc::new(MapDirectory::new(&[])),
        "a-different-secret".to_string(),
        7200,
    );

    let err = other.authenticate(&issued.access_token).unwrap_err();
    assert!(matches!(err, AuthError::TokenInvalid(_)));
}

#[tokio::test]
async fn expired_token_reports_expired_not_invalid() {
    let service = service_with_ttl(-3600);
    let issued = service
        .login("alice@example.com", "correct-secret")
        .await
        .unwrap();

    let err = service.authenticate(&issued.access_token).unwrap_err();
    assert!(matches!(err, AuthError::TokenExpired));
}

// ============================================================================
// Token authority scenarios
// ============================================================================

#[test]
fn literal_garbage_is_invalid() {
    let err = verify_token("not.a.token", SECRET).unwrap_err();
    assert!(matches!(err, TokenError::Invalid(_)));
}

#[test]
fn single_byte_tamper_invalidates_signature() {
    let token = issue_token("alice@example.com", SECRET, 7200).unwrap();

    let bytes = token.as_bytes();
    for position in [0, bytes.len() / 2, bytes.len() - 1] {
        let mut tampered = bytes.to_vec();
        tampered[position] = if tampered[position] == b'x' { b'y' } else { b'x' };
        let tampered = String::from_utf8(tampered).unwrap();
        if tampered == token {
            continue;
        }

        assert!(
            verify_token(&tampered, SECRET).is_err(),
            "tampered token at byte {} must not verify",
            position
        );
    }
}

#[test]
fn verify_is_stable_before_expiry() {
    let token = issue_token("alice@example.com", SECRET, 7200).unwrap();
    let first = verify_token(&token, SECRET).unwrap();
    let second = verify_token(&token, SECRET).unwrap();
    assert_eq!(first.sub, second.sub);
    assert_eq!(first.exp, second.exp);
}

// ============================================================================
// Credential verifier scenarios
// ============================================================================

#[test]
fn distinct_secrets_do_not_cross_verify() {
    let hash_a = hash_password("senha123").unwrap();
    let hash_b = hash_password("senha456").unwrap();

    assert!(verify_password("senha123", &hash_a));
    assert!(verify_password("senha456", &hash_b));
    assert!(!verify_password("senha123", &hash_b));
    assert!(!verify_password("senha456", &hash_a));
}
