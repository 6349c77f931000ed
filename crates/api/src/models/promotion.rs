//! Promotion codes.
//!
//! Promotions are validated through their own endpoint but are NOT applied
//! to checkout totals; the two flows are currently disconnected.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use nuru_core::{PromotionId, PromotionKind, PromotionStatus};

/// Why a promotion code cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromotionRejection {
    #[error("Promo code expired")]
    Expired,
    #[error("Promo code limit reached")]
    LimitReached,
}

/// A discount code managed through the admin panel.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Promotion {
    pub id: PromotionId,
    /// Stored uppercase; lookups normalize input the same way.
    pub code: String,
    pub discount: Decimal,
    pub kind: PromotionKind,
    pub status: PromotionStatus,
    pub uses: i32,
    pub usage_limit: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Promotion {
    /// Check whether the code is currently usable.
    ///
    /// # Errors
    ///
    /// Returns `PromotionRejection::Expired` when past the expiry and
    /// `PromotionRejection::LimitReached` when the usage limit is spent.
    pub fn check_usable(&self, now: DateTime<Utc>) -> Result<(), PromotionRejection> {
        if let Some(expires_at) = self.expires_at
            && expires_at < now
        {
            return Err(PromotionRejection::Expired);
        }

        if let Some(limit) = self.usage_limit
            && self.uses >= limit
        {
            return Err(PromotionRejection::LimitReached);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn promo() -> Promotion {
        Promotion {
            id: PromotionId::new(1),
            code: "GLOW10".to_string(),
            discount: "10".parse().unwrap(),
            kind: PromotionKind::Percentage,
            status: PromotionStatus::Active,
            uses: 0,
            usage_limit: None,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_usable_without_limits() {
        assert!(promo().check_usable(Utc::now()).is_ok());
    }

    #[test]
    fn test_expired_code_rejected() {
        let mut p = promo();
        p.expires_at = Some(Utc::now() - Duration::hours(1));
        assert_eq!(
            p.check_usable(Utc::now()),
            Err(PromotionRejection::Expired)
        );
    }

    #[test]
    fn test_spent_limit_rejected() {
        let mut p = promo();
        p.usage_limit = Some(5);
        p.uses = 5;
        assert_eq!(
            p.check_usable(Utc::now()),
            Err(PromotionRejection::LimitReached)
        );
    }

    #[test]
    fn test_limit_with_remaining_uses_ok() {
        let mut p = promo();
        p.usage_limit = Some(5);
        p.uses = 4;
        assert!(p.check_usable(Utc::now()).is_ok());
    }
}
