//! Checkout service.
//!
//! Checkout runs as a single transaction: lock the user row, read the cart,
//! snapshot the resolvable lines against the live catalog, insert the order,
//! clear the cart. Cart lines whose product has disappeared are skipped with
//! a warning rather than blocking the purchase.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use nuru_core::ProductId;

use crate::db::orders::{self, NewOrder};
use crate::db::{carts, products, users};
use crate::error::{ApiError, Result};
use crate::models::{CartLine, Order, OrderItem, Product, User};
use crate::services::payment_methods;

/// Attempts at drawing an unused order code before giving up.
const CODE_ATTEMPTS: usize = 5;

/// The pure outcome of snapshotting a cart against the catalog.
#[derive(Debug)]
pub struct Snapshot {
    pub items: Vec<OrderItem>,
    pub total_usd: Decimal,
    /// Cart lines whose product no longer exists.
    pub skipped: Vec<ProductId>,
}

/// Checkout service.
pub struct CheckoutService<'a> {
    pool: &'a PgPool,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Place an order from the user's current cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::EmptyCart` if the cart has no lines,
    /// `ApiError::Validation` if no line resolves to a product or the
    /// payment method isn't offered in the user's country.
    pub async fn place_order(
        &self,
        user: &User,
        shipping_address: &serde_json::Value,
        payment_method: &str,
    ) -> Result<Order> {
        if !payment_methods::is_offered(payment_method, &user.country) {
            return Err(ApiError::Validation(format!(
                "Payment method '{payment_method}' is not available in {}",
                user.country
            )));
        }

        let mut tx = self.pool.begin().await.map_err(crate::db::RepositoryError::from)?;

        users::lock(&mut tx, user.id).await?;

        let lines = carts::lines(&mut tx, user.id).await?;
        if lines.is_empty() {
            return Err(ApiError::EmptyCart);
        }

        let product_ids: Vec<ProductId> = lines.iter().map(|l| l.product_id).collect();
        let catalog = products::get_many(&mut *tx, &product_ids).await?;

        let snapshot = snapshot_lines(&lines, &catalog);
        for product_id in &snapshot.skipped {
            tracing::warn!(
                user_id = %user.id,
                product_id = %product_id,
                "Skipping cart line for missing product at checkout"
            );
        }

        if snapshot.items.is_empty() {
            return Err(ApiError::Validation(
                "No available products in cart".to_string(),
            ));
        }

        let code = allocate_code(&mut tx).await?;

        let order = orders::insert(
            &mut tx,
            NewOrder {
                code: &code,
                user_id: user.id,
                items: &snapshot.items,
                total_usd: snapshot.total_usd,
                shipping_address,
                payment_method,
            },
        )
        .await?;

        carts::clear(&mut tx, user.id).await?;
        users::touch(&mut tx, user.id).await?;

        tx.commit().await.map_err(crate::db::RepositoryError::from)?;

        tracing::info!(
            order_code = %order.code,
            user_id = %user.id,
            total_usd = %order.total_usd,
            "Order placed"
        );

        Ok(order)
    }
}

async fn allocate_code(tx: &mut sqlx::PgConnection) -> Result<String> {
    for _ in 0..CODE_ATTEMPTS {
        let code = order_code();
        if !orders::code_exists(tx, &code).await? {
            return Ok(code);
        }
    }

    Err(ApiError::Internal(
        "Could not allocate a unique order code".to_string(),
    ))
}

/// Snapshot cart lines against the live catalog.
///
/// Unit prices and names are copied into the order items, so later catalog
/// edits never change what this order shows. Lines that don't resolve are
/// collected into `skipped`.
#[must_use]
pub fn snapshot_lines(lines: &[CartLine], catalog: &[Product]) -> Snapshot {
    let mut items = Vec::with_capacity(lines.len());
    let mut skipped = Vec::new();
    let mut total_usd = Decimal::ZERO;

    for line in lines {
        let Some(product) = catalog.iter().find(|p| p.id == line.product_id) else {
            skipped.push(line.product_id);
            continue;
        };

        let line_total = product.base_price_usd * Decimal::from(line.quantity);
        total_usd += line_total;

        items.push(OrderItem {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity: line.quantity,
            unit_price_usd: product.base_price_usd,
            line_total_usd: line_total,
        });
    }

    Snapshot {
        items,
        total_usd,
        skipped,
    }
}

/// Generate a human-facing order code.
#[must_use]
pub fn order_code() -> String {
    order_code_from(Uuid::new_v4())
}

/// First eight hex characters of the UUID, uppercased.
fn order_code_from(uuid: Uuid) -> String {
    uuid.simple().to_string()[..8].to_uppercase()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nuru_core::PricingEngine;

    fn product(id: i32, name: &str, price: &str) -> Product {
        let engine = PricingEngine::default();
        let base: Decimal = price.parse().unwrap();
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
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

    #[test]
    fn test_snapshot_copies_prices_and_sums() {
        let catalog = vec![
            product(1, "Vitamin C Serum", "29.99"),
            product(2, "Shea Body Butter", "15.25"),
        ];
        let lines = vec![line(1, 2), line(2, 3)];

        let snapshot = snapshot_lines(&lines, &catalog);

        assert!(snapshot.skipped.is_empty());
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(
            snapshot.items[0].line_total_usd,
            "59.98".parse::<Decimal>().unwrap()
        );
        assert_eq!(snapshot.total_usd, "105.73".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_snapshot_skips_missing_products() {
        let catalog = vec![product(1, "Vitamin C Serum", "29.99")];
        let lines = vec![line(1, 1), line(42, 2)];

        let snapshot = snapshot_lines(&lines, &catalog);

        assert_eq!(snapshot.skipped, vec![ProductId::new(42)]);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.total_usd, "29.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_snapshot_of_all_missing_lines_is_empty() {
        let snapshot = snapshot_lines(&[line(7, 1)], &[]);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total_usd, Decimal::ZERO);
    }

    #[test]
    fn test_order_code_shape() {
        let uuid = Uuid::parse_str("a1b2c3d4-e5f6-7890-abcd-ef1234567890").unwrap();
        assert_eq!(order_code_from(uuid), "A1B2C3D4");

        let code = order_code();
        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
