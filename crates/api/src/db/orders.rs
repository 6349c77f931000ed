//! Order repository.
//!
//! Order line items are stored as a JSONB snapshot taken at checkout time;
//! nothing here joins back to the products table. Only the two status
//! columns are mutable after insert.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use nuru_core::{OrderId, OrderStatus, PaymentStatus, UserId};

use super::RepositoryError;
use crate::models::{Order, OrderItem};

const ORDER_COLUMNS: &str = "id, code, user_id, items, total_usd, shipping_address, \
                             payment_method, payment_status, order_status, \
                             created_at, updated_at";

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    code: String,
    user_id: UserId,
    items: Json<Vec<OrderItem>>,
    total_usd: Decimal,
    shipping_address: serde_json::Value,
    payment_method: String,
    payment_status: PaymentStatus,
    order_status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            user_id: row.user_id,
            items: row.items.0,
            total_usd: row.total_usd,
            shipping_address: row.shipping_address,
            payment_method: row.payment_method,
            payment_status: row.payment_status,
            order_status: row.order_status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Fields for inserting an order inside the checkout transaction.
#[derive(Debug)]
pub struct NewOrder<'n> {
    pub code: &'n str,
    pub user_id: UserId,
    pub items: &'n [OrderItem],
    pub total_usd: Decimal,
    pub shipping_address: &'n serde_json::Value,
    pub payment_method: &'n str,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    /// Get one of a user's orders by ID.
    ///
    /// The user scope is part of the query, so one customer can never read
    /// another's order even with a guessed ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_for_user(
        &self,
        id: OrderId,
        user_id: UserId,
    ) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Order::from))
    }

    /// List all orders across users, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    /// List the `limit` most recent orders, for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    /// Update an order's payment and/or fulfillment status.
    ///
    /// Passing `None` leaves that status unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_statuses(
        &self,
        id: OrderId,
        payment_status: Option<PaymentStatus>,
        order_status: Option<OrderStatus>,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "UPDATE orders SET \
                 payment_status = COALESCE($2, payment_status), \
                 order_status = COALESCE($3, order_status), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(payment_status)
        .bind(order_status)
        .fetch_optional(self.pool)
        .await?;

        row.map(Order::from).ok_or(RepositoryError::NotFound)
    }

    /// Sum of `total_usd` over paid orders created since `since`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn paid_revenue_usd_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Decimal, RepositoryError> {
        let (revenue,): (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(total_usd), 0) FROM orders \
             WHERE payment_status = 'paid' AND created_at >= $1",
        )
        .bind(since)
        .fetch_one(self.pool)
        .await?;

        Ok(revenue)
    }

    /// Count all orders ever placed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_all(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

/// Check whether an order code is already taken, inside a transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub(crate) async fn code_exists(
    conn: &mut PgConnection,
    code: &str,
) -> Result<bool, RepositoryError> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM orders WHERE code = $1")
        .bind(code)
        .fetch_optional(conn)
        .await?;

    Ok(row.is_some())
}

/// Insert an order inside the checkout transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails, including the
/// (checked-for, but still possible) code collision.
pub(crate) async fn insert(
    conn: &mut PgConnection,
    new_order: NewOrder<'_>,
) -> Result<Order, RepositoryError> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "INSERT INTO orders \
             (code, user_id, items, total_usd, shipping_address, payment_method) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {ORDER_COLUMNS}"
    ))
    .bind(new_order.code)
    .bind(new_order.user_id)
    .bind(Json(new_order.items))
    .bind(new_order.total_usd)
    .bind(new_order.shipping_address)
    .bind(new_order.payment_method)
    .fetch_one(conn)
    .await?;

    Ok(row.into())
}
