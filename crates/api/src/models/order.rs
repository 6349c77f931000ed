//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nuru_core::{OrderId, OrderStatus, PaymentStatus, ProductId, UserId};

/// A line-item snapshot captured at checkout time.
///
/// Immune to later product edits: the name and unit price here are the
/// values that were current when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price_usd: Decimal,
    pub line_total_usd: Decimal,
}

/// An immutable order created by checkout.
///
/// Only the two status fields change after creation, and only through
/// admin action.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Internal storage identifier.
    pub id: OrderId,
    /// Human-facing short code (8 uppercase hex characters).
    pub code: String,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_usd: Decimal,
    /// Opaque structured blob; stored as given.
    pub shipping_address: serde_json::Value,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_snapshot_roundtrip() {
        let item = OrderItem {
            product_id: ProductId::new(3),
            product_name: "Complexion Clarifying Mask".to_string(),
            quantity: 2,
            unit_price_usd: "25.75".parse().unwrap(),
            line_total_usd: "51.50".parse().unwrap(),
        };

        let json = serde_json::to_string(&item).unwrap();
        let back: OrderItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_order_serializes_statuses_as_text() {
        let order = Order {
            id: OrderId::new(1),
            code: "A1B2C3D4".to_string(),
            user_id: UserId::new(9),
            items: vec![],
            total_usd: "25.00".parse().unwrap(),
            shipping_address: serde_json::json!({"city": "Nairobi"}),
            payment_method: "mpesa".to_string(),
            payment_status: PaymentStatus::Pending,
            order_status: OrderStatus::Processing,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["payment_status"], "pending");
        assert_eq!(json["order_status"], "processing");
        assert_eq!(json["code"], "A1B2C3D4");
        assert_eq!(json["shipping_address"]["city"], "Nairobi");
    }
}
