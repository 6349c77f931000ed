//! Shipping zones managed through the admin panel.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use nuru_core::{Currency, ShippingZoneId};

/// A delivery region with a flat shipping rate.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ShippingZone {
    pub id: ShippingZoneId,
    pub name: String,
    pub rate: Decimal,
    pub currency: Currency,
    /// Free-text delivery estimate, e.g. "2-4".
    pub delivery_days: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
