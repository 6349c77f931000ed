//! Product domain type.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nuru_core::{Currency, CurrencyPrice, ProductId};

/// A catalog product.
///
/// `prices` is derived from `base_price_usd` by the pricing engine whenever
/// the base price is set or changed; it is never edited on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Canonical price, denominated in USD. Non-negative.
    pub base_price_usd: Decimal,
    /// Derived per-currency price map.
    pub prices: BTreeMap<Currency, CurrencyPrice>,
    /// Availability flag; products are hidden from the storefront rather
    /// than deleted by stock-outs.
    pub in_stock: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nuru_core::PricingEngine;

    #[test]
    fn test_product_serializes_price_map() {
        let engine = PricingEngine::default();
        let base: Decimal = "18.50".parse().unwrap();
        let product = Product {
            id: ProductId::new(5),
            name: "Rich Gentle Foaming Lather".to_string(),
            description: "Creamy foaming cleanser".to_string(),
            category: "Cleanser".to_string(),
            base_price_usd: base,
            prices: engine.price_map(base),
            in_stock: true,
            image_url: Some("/images/cleanser.jpg".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["prices"]["KES"]["symbol"], "KSh");
        assert_eq!(json["base_price_usd"], "18.50");
        assert_eq!(json["in_stock"], true);
    }
}
