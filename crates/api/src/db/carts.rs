//! Cart repository.
//!
//! Each mutation runs in its own transaction that starts by locking the
//! owning user's row, so concurrent adds and removes from the same account
//! apply one at a time. Adding a product already in the cart increments the
//! existing line via an upsert instead of inserting a duplicate.

use sqlx::{PgConnection, PgPool};

use nuru_core::{ProductId, UserId};

use super::{RepositoryError, users};
use crate::models::CartLine;

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read a user's cart lines, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lines_for_user(&self, user_id: UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        lines(&mut conn, user_id).await
    }

    /// Add `quantity` of a product to the cart, merging into an existing
    /// line if present. Returns the number of distinct lines afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user or product doesn't
    /// exist. Returns `RepositoryError::Database` for other database errors.
    pub async fn add_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<i64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        users::lock(&mut tx, user_id).await?;

        sqlx::query(
            "INSERT INTO cart_items (user_id, product_id, quantity) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, product_id) \
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            RepositoryError::Database(e)
        })?;

        users::touch(&mut tx, user_id).await?;
        let count = count_lines(&mut tx, user_id).await?;

        tx.commit().await?;

        Ok(count)
    }

    /// Remove a product's line from the cart entirely. Returns the number
    /// of distinct lines afterwards.
    ///
    /// Removing a product that isn't in the cart is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn remove_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<i64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        users::lock(&mut tx, user_id).await?;

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

        users::touch(&mut tx, user_id).await?;
        let count = count_lines(&mut tx, user_id).await?;

        tx.commit().await?;

        Ok(count)
    }
}

/// Read cart lines inside a transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub(crate) async fn lines(
    conn: &mut PgConnection,
    user_id: UserId,
) -> Result<Vec<CartLine>, RepositoryError> {
    let lines = sqlx::query_as::<_, CartLine>(
        "SELECT product_id, quantity, added_at \
         FROM cart_items WHERE user_id = $1 ORDER BY added_at ASC, product_id ASC",
    )
    .bind(user_id)
    .fetch_all(conn)
    .await?;

    Ok(lines)
}

/// Delete every line in a user's cart, inside a transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub(crate) async fn clear(
    conn: &mut PgConnection,
    user_id: UserId,
) -> Result<(), RepositoryError> {
    sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
        .bind(user_id)
        .execute(conn)
        .await?;

    Ok(())
}

async fn count_lines(conn: &mut PgConnection, user_id: UserId) -> Result<i64, RepositoryError> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(conn)
            .await?;

    Ok(count)
}
