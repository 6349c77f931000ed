//! Auth token repository.
//!
//! Bearer tokens are opaque random strings stored server-side with a fixed
//! expiry. Lookup joins straight to the owning user so request
//! authentication is a single query.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use nuru_core::UserId;

use super::RepositoryError;
use crate::models::User;

/// Repository for auth token operations.
pub struct TokenRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TokenRepository<'a> {
    /// Create a new token repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn insert(
        &self,
        user_id: UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO auth_tokens (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(token)
            .bind(user_id)
            .bind(expires_at)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Resolve an unexpired token to its user.
    ///
    /// Returns `None` for unknown and expired tokens alike.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_user(&self, token: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT u.id, u.name, u.email, u.phone, u.role, u.country, \
                    u.preferred_currency, u.created_at, u.updated_at \
             FROM auth_tokens t \
             JOIN users u ON u.id = t.user_id \
             WHERE t.token = $1 AND t.expires_at > NOW()",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Revoke every token a user holds. Used after password changes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_for_user(&self, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM auth_tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Drop expired tokens. Run from the CLI as periodic housekeeping.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn purge_expired(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE expires_at <= NOW()")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
