//! User repository
//!
//! Thin persistence layer over Postgres. Also implements the
//! [`AccountDirectory`] seam the auth service resolves credentials
//! through.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::auth::{AccountDirectory, AuthError, CredentialRecord};
use crate::models::User;

/// Repository for user accounts
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user. The password arrives here already hashed.
    pub async fn create_user(
        &self,
        nickname: &str,
        email: &str,
        password_hash: &str,
        roles: Vec<String>,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO users (nickname, email, password_hash, roles, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, nickname, email, password_hash, roles, last_login_at, created_at
            "#,
        )
        .bind(nickname)
        .bind(email)
        .bind(password_hash)
        .bind(Json(roles))
        .fetch_one(&self.pool)
        .await
    }

    /// Find a user by email (exact match)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, nickname, email, password_hash, roles, last_login_at, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find a user by nickname, case-insensitively
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, nickname, email, password_hash, roles, last_login_at, created_at
            FROM users
            WHERE LOWER(nickname) = LOWER($1)
            "#,
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, nickname, email, password_hash, roles, last_login_at, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Update a user's email by nickname. Returns the updated row, or
    /// `None` if no such user exists.
    pub async fn update_email(
        &self,
        nickname: &str,
        new_email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            r#"
            UPDATE users
            SET email = $1
            WHERE LOWER(nickname) = LOWER($2)
            RETURNING id, nickname, email, password_hash, roles, last_login_at, created_at
            "#,
        )
        .bind(new_email)
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a user by nickname. Returns whether a row was removed.
    pub async fn delete_by_nickname(&self, nickname: &str) -> Result<bool, sqlx::Error> {
        let rows_affected = sqlx::query(
            r#"
            DELETE FROM users WHERE LOWER(nickname) = LOWER($1)
            "#,
        )
        .bind(nickname)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Stamp the last successful login for an identity
    pub async fn record_login(&self, email: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users SET last_login_at = NOW() WHERE email = $1
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AccountDirectory for UserRepository {
    async fn resolve_by_identity(
        &self,
        identity: &str,
    ) -> Result<Option<CredentialRecord>, AuthError> {
        let user = self
            .find_by_email(identity)
            .await
            .map_err(|e| AuthError::Directory(e.to_string()))?;

        Ok(user.map(|u| CredentialRecord {
            identity: u.email,
            password_hash: u.password_hash,
        }))
    }
}
