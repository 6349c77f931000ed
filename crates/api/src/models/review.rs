//! Product reviews (admin moderation only).

use chrono::{DateTime, Utc};
use serde::Serialize;

use nuru_core::{ProductId, ReviewId, ReviewStatus};

/// A customer review awaiting or past moderation.
///
/// The product name is denormalized at submission time so the review stays
/// readable even if the product is later removed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub product_name: String,
    pub customer_name: String,
    pub customer_email: String,
    /// 1-5.
    pub rating: i32,
    pub comment: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}
