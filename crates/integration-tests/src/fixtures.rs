//! Shared fixture builders for the test files under `tests/`.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use rust_decimal::Decimal;

use nuru_api::models::{CartLine, Product, User};
use nuru_core::{Currency, Email, PricingEngine, ProductId, UserId, UserRole};

/// A catalog product with a consistent derived price map.
#[must_use]
pub fn product(id: i32, name: &str, price: &str) -> Product {
    let engine = PricingEngine::default();
    let base: Decimal = price.parse().unwrap();

    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: format!("{name} description"),
        category: "Serum".to_string(),
        base_price_usd: base,
        prices: engine.price_map(base),
        in_stock: true,
        image_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A cart line for `product_id`.
#[must_use]
pub fn cart_line(product_id: i32, quantity: i32) -> CartLine {
    CartLine {
        product_id: ProductId::new(product_id),
        quantity,
        added_at: Utc::now(),
    }
}

/// A customer account with the given preferred currency.
#[must_use]
pub fn customer(currency: Currency) -> User {
    User {
        id: UserId::new(1),
        name: "Achieng".to_string(),
        email: Email::parse("achieng@example.com").unwrap(),
        phone: Some("+254700000001".to_string()),
        role: UserRole::Customer,
        country: currency.country().to_string(),
        preferred_currency: currency,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
