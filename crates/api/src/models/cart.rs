//! Cart domain types and view shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use nuru_core::{LocalizedTotal, ProductId};

/// One line of a user's cart: a product reference and a quantity.
///
/// The cart holds at most one line per product; adding an already-present
/// product increments the quantity instead of duplicating the line.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

/// One cart line joined with live product data, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub product_name: String,
    /// Live unit price (not a snapshot; reflects current catalog price).
    pub unit_price_usd: Decimal,
    pub quantity: i32,
    pub line_total_usd: Decimal,
}

/// Cart totals in USD and the user's preferred currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotal {
    pub usd: Decimal,
    #[serde(flatten)]
    pub local: LocalizedTotal,
}

/// The full cart view returned by `GET /cart`.
///
/// `unavailable` lists product references that no longer resolve to a
/// catalog product; those lines are excluded from the total rather than
/// failing the request.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub unavailable: Vec<ProductId>,
    pub total: CartTotal,
}
