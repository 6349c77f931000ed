//! Auth token housekeeping.

use nuru_api::db::tokens::TokenRepository;

use super::CommandError;

/// Delete expired auth tokens.
///
/// # Errors
///
/// Returns `CommandError` if the query fails.
pub async fn purge() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let purged = TokenRepository::new(&pool).purge_expired().await?;
    tracing::info!("Purged {purged} expired tokens");

    Ok(())
}
