//! Product repository for catalog operations.
//!
//! The per-currency price map is stored as JSONB alongside the USD base
//! price. The map is always written together with the base price, never
//! edited on its own; callers recompute it through the pricing engine
//! before any write that touches the price.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgExecutor;
use sqlx::types::Json;
use sqlx::PgPool;

use nuru_core::{Currency, CurrencyPrice, ProductId};

use super::RepositoryError;
use crate::models::Product;

const PRODUCT_COLUMNS: &str = "id, name, description, category, base_price_usd, prices, \
                               in_stock, image_url, created_at, updated_at";

/// Raw product row; `prices` decodes from JSONB.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: String,
    category: String,
    base_price_usd: Decimal,
    prices: Json<BTreeMap<Currency, CurrencyPrice>>,
    in_stock: bool,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            base_price_usd: row.base_price_usd,
            prices: row.prices.0,
            in_stock: row.in_stock,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Fields required to insert a new product.
#[derive(Debug)]
pub struct NewProduct<'n> {
    pub name: &'n str,
    pub description: &'n str,
    pub category: &'n str,
    pub base_price_usd: Decimal,
    pub prices: BTreeMap<Currency, CurrencyPrice>,
    pub in_stock: bool,
    pub image_url: Option<&'n str>,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the whole catalog, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, new_product: NewProduct<'_>) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products \
                 (name, description, category, base_price_usd, prices, in_stock, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(new_product.name)
        .bind(new_product.description)
        .bind(new_product.category)
        .bind(new_product.base_price_usd)
        .bind(Json(new_product.prices))
        .bind(new_product.in_stock)
        .bind(new_product.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Overwrite every editable field of a product.
    ///
    /// Callers merge partial edits into the loaded product and recompute the
    /// price map first, so the base price and the map never diverge.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET \
                 name = $2, description = $3, category = $4, base_price_usd = $5, \
                 prices = $6, in_stock = $7, image_url = $8, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.base_price_usd)
        .bind(Json(&product.prices))
        .bind(product.in_stock)
        .bind(product.image_url.as_deref())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::from).ok_or(RepositoryError::NotFound)
    }

    /// Delete a product.
    ///
    /// Returns `true` if a row was deleted. Cart lines referencing the
    /// product are left in place and surface as unavailable references.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count products currently flagged out of stock.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_out_of_stock(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM products WHERE in_stock = FALSE")
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// Fetch the products matching `ids`, in no particular order.
    ///
    /// Missing IDs are silently absent from the result; callers decide how
    /// to treat dangling references.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_many(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        get_many(self.pool, ids).await
    }
}

/// Executor-generic variant of [`ProductRepository::get_many`], usable
/// inside transactions.
pub(crate) async fn get_many<'e, E>(
    executor: E,
    ids: &[ProductId],
) -> Result<Vec<Product>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let raw_ids: Vec<i32> = ids.iter().map(|id| id.as_i32()).collect();

    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)"
    ))
    .bind(&raw_ids)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(Product::from).collect())
}
