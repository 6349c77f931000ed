//! Cart service.
//!
//! Orchestrates cart mutations and assembles the cart view. Prices in the
//! view are live catalog prices; nothing is snapshotted until checkout.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use nuru_core::{PricingEngine, ProductId};

use crate::db::carts::CartRepository;
use crate::db::products::ProductRepository;
use crate::error::{ApiError, Result};
use crate::models::{CartItemView, CartLine, CartTotal, CartView, Product, User};

/// Cart service.
pub struct CartService<'a> {
    pool: &'a PgPool,
    pricing: &'a PricingEngine,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, pricing: &'a PricingEngine) -> Self {
        Self { pool, pricing }
    }

    /// Add a product to the user's cart. Returns the number of distinct
    /// lines afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for non-positive quantities and
    /// out-of-stock products, `ApiError::NotFound` for unknown products.
    pub async fn add(&self, user: &User, product_id: ProductId, quantity: i32) -> Result<i64> {
        if quantity < 1 {
            return Err(ApiError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let product = ProductRepository::new(self.pool)
            .get(product_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Product {product_id} not found")))?;

        if !product.in_stock {
            return Err(ApiError::Validation(format!(
                "{} is out of stock",
                product.name
            )));
        }

        let count = CartRepository::new(self.pool)
            .add_line(user.id, product_id, quantity)
            .await?;

        Ok(count)
    }

    /// Remove a product's line from the user's cart. Returns the number of
    /// distinct lines afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Database` if a query fails.
    pub async fn remove(&self, user: &User, product_id: ProductId) -> Result<i64> {
        let count = CartRepository::new(self.pool)
            .remove_line(user.id, product_id)
            .await?;

        Ok(count)
    }

    /// Assemble the user's cart view with totals in USD and their preferred
    /// currency.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Database` if a query fails.
    pub async fn view(&self, user: &User) -> Result<CartView> {
        let lines = CartRepository::new(self.pool).lines_for_user(user.id).await?;

        let product_ids: Vec<ProductId> = lines.iter().map(|l| l.product_id).collect();
        let products = ProductRepository::new(self.pool).get_many(&product_ids).await?;

        Ok(build_cart_view(&lines, &products, user, self.pricing))
    }
}

/// Join cart lines with catalog products into the display shape.
///
/// Lines whose product no longer resolves are reported in `unavailable` and
/// excluded from the total instead of failing the whole view.
#[must_use]
pub fn build_cart_view(
    lines: &[CartLine],
    products: &[Product],
    user: &User,
    pricing: &PricingEngine,
) -> CartView {
    let by_id: HashMap<ProductId, &Product> = products.iter().map(|p| (p.id, p)).collect();

    let mut items = Vec::with_capacity(lines.len());
    let mut unavailable = Vec::new();
    let mut total_usd = Decimal::ZERO;

    for line in lines {
        let Some(product) = by_id.get(&line.product_id) else {
            unavailable.push(line.product_id);
            continue;
        };

        let line_total = product.base_price_usd * Decimal::from(line.quantity);
        total_usd += line_total;

        items.push(CartItemView {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price_usd: product.base_price_usd,
            quantity: line.quantity,
            line_total_usd: line_total,
        });
    }

    CartView {
        items,
        unavailable,
        total: CartTotal {
            usd: total_usd,
            local: pricing.localize(total_usd, user.preferred_currency),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nuru_core::{Currency, Email, UserId, UserRole};

    fn product(id: i32, price: &str) -> Product {
        let engine = PricingEngine::default();
        let base: Decimal = price.parse().unwrap();
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            category: "Serum".to_string(),
            base_price_usd: base,
            prices: engine.price_map(base),
            in_stock: true,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn line(product_id: i32, quantity: i32) -> CartLine {
        CartLine {
            product_id: ProductId::new(product_id),
            quantity,
            added_at: Utc::now(),
        }
    }

    fn user(currency: Currency) -> User {
        User {
            id: UserId::new(1),
            name: "Amina".to_string(),
            email: Email::parse("amina@example.com").unwrap(),
            phone: None,
            role: UserRole::Customer,
            country: "Kenya".to_string(),
            preferred_currency: currency,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_view_totals_and_localization() {
        let engine = PricingEngine::default();
        let products = vec![product(1, "10.00"), product(2, "5.50")];
        let lines = vec![line(1, 2), line(2, 1)];

        let view = build_cart_view(&lines, &products, &user(Currency::KES), &engine);

        assert_eq!(view.items.len(), 2);
        assert!(view.unavailable.is_empty());
        assert_eq!(view.total.usd, "25.50".parse::<Decimal>().unwrap());
        // 25.50 * 128.5 = 3276.75
        assert_eq!(view.total.local.local, "3276.75".parse::<Decimal>().unwrap());
        assert_eq!(view.total.local.symbol, "KSh");
    }

    #[test]
    fn test_dangling_reference_excluded_from_total() {
        let engine = PricingEngine::default();
        let products = vec![product(1, "10.00")];
        let lines = vec![line(1, 1), line(99, 3)];

        let view = build_cart_view(&lines, &products, &user(Currency::KES), &engine);

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.unavailable, vec![ProductId::new(99)]);
        assert_eq!(view.total.usd, "10.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_empty_cart_view() {
        let engine = PricingEngine::default();
        let view = build_cart_view(&[], &[], &user(Currency::UGX), &engine);

        assert!(view.items.is_empty());
        assert_eq!(view.total.usd, Decimal::ZERO);
        assert_eq!(view.total.local.local, Decimal::ZERO);
        assert_eq!(view.total.local.symbol, "USh");
    }
}
