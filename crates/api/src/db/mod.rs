//! Database operations for the API `PostgreSQL` instance.
//!
//! One database holds the whole store:
//!
//! ## Tables
//!
//! - `users` - Accounts (customer and admin), login credentials
//! - `auth_tokens` - Opaque bearer tokens with a 24h expiry
//! - `products` - Catalog with derived per-currency price maps (JSONB)
//! - `cart_items` - One row per (user, product) cart line
//! - `orders` - Immutable line-item snapshots (JSONB) plus status fields
//! - `promotions`, `reviews`, `shipping_zones`, `support_tickets`, `site_content`
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p nuru-cli -- migrate
//! ```

pub mod carts;
pub mod content;
pub mod orders;
pub mod products;
pub mod promotions;
pub mod reviews;
pub mod shipping_zones;
pub mod support_tickets;
pub mod tokens;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unique constraint violated (e.g. duplicate email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The referenced row does not exist.
    #[error("not found")]
    NotFound,

    /// A stored value could not be interpreted.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map a unique-violation database error to `Conflict`, anything else to
/// `Database`.
fn conflict_on_unique(e: sqlx::Error, message: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(message.to_owned());
    }
    RepositoryError::Database(e)
}
