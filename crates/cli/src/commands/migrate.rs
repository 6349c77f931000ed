//! Database migration command.
//!
//! Migrations live in `crates/api/migrations/` and are embedded into this
//! binary at compile time, so the deployed CLI needs no source checkout.

use super::CommandError;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns `CommandError` if the connection or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;
    tracing::info!("Migrations complete");

    Ok(())
}
