//! Admin user management commands.

use nuru_api::services::AuthService;

use super::CommandError;

/// Create an admin account.
///
/// # Errors
///
/// Returns `CommandError` if the email is taken, the password is too weak,
/// or the database is unreachable.
pub async fn create(
    email: &str,
    name: &str,
    password: &str,
    country: &str,
) -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let user = AuthService::new(&pool)
        .create_admin(name, email, password, country)
        .await?;

    tracing::info!(user_id = %user.id, email = %user.email, "Admin user created");

    Ok(())
}
