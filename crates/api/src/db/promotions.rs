//! Promotion repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use nuru_core::{PromotionId, PromotionKind, PromotionStatus};

use super::{RepositoryError, conflict_on_unique};
use crate::models::Promotion;

const PROMOTION_COLUMNS: &str =
    "id, code, discount, kind, status, uses, usage_limit, expires_at, created_at";

/// Fields required to insert a promotion.
#[derive(Debug)]
pub struct NewPromotion<'n> {
    /// Stored uppercase; callers normalize before insert.
    pub code: &'n str,
    pub discount: Decimal,
    pub kind: PromotionKind,
    pub usage_limit: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Repository for promotion database operations.
pub struct PromotionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PromotionRepository<'a> {
    /// Create a new promotion repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every promotion, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Promotion>, RepositoryError> {
        let promos = sqlx::query_as::<_, Promotion>(&format!(
            "SELECT {PROMOTION_COLUMNS} FROM promotions ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(promos)
    }

    /// List promotions currently marked active.
    ///
    /// Expiry and usage limits are checked by the caller, not here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Promotion>, RepositoryError> {
        let promos = sqlx::query_as::<_, Promotion>(&format!(
            "SELECT {PROMOTION_COLUMNS} FROM promotions \
             WHERE status = 'active' ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(promos)
    }

    /// Look up an active promotion by its (uppercased) code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_active_by_code(
        &self,
        code: &str,
    ) -> Result<Option<Promotion>, RepositoryError> {
        let promo = sqlx::query_as::<_, Promotion>(&format!(
            "SELECT {PROMOTION_COLUMNS} FROM promotions WHERE code = $1 AND status = 'active'"
        ))
        .bind(code)
        .fetch_optional(self.pool)
        .await?;

        Ok(promo)
    }

    /// Insert a new promotion.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the code already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_promo: NewPromotion<'_>) -> Result<Promotion, RepositoryError> {
        let promo = sqlx::query_as::<_, Promotion>(&format!(
            "INSERT INTO promotions (code, discount, kind, usage_limit, expires_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {PROMOTION_COLUMNS}"
        ))
        .bind(new_promo.code)
        .bind(new_promo.discount)
        .bind(new_promo.kind)
        .bind(new_promo.usage_limit)
        .bind(new_promo.expires_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "promo code already exists"))?;

        Ok(promo)
    }

    /// Flip a promotion between active and disabled.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the promotion doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_status(
        &self,
        id: PromotionId,
        status: PromotionStatus,
    ) -> Result<Promotion, RepositoryError> {
        let promo = sqlx::query_as::<_, Promotion>(&format!(
            "UPDATE promotions SET status = $2 WHERE id = $1 RETURNING {PROMOTION_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        promo.ok_or(RepositoryError::NotFound)
    }

    /// Delete a promotion. Returns `true` if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: PromotionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
