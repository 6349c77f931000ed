//! CLI subcommand implementations.

pub mod admin;
pub mod migrate;
pub mod seed;
pub mod tokens;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors shared by all subcommands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Repository error: {0}")]
    Repository(#[from] nuru_api::db::RepositoryError),

    #[error("Auth error: {0}")]
    Auth(#[from] nuru_api::services::auth::AuthError),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

/// Connect to the database named by `NURU_DATABASE_URL` / `DATABASE_URL`.
pub async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let url = std::env::var("NURU_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnvVar("NURU_DATABASE_URL"))?;

    let pool = nuru_api::db::create_pool(&SecretString::from(url)).await?;
    Ok(pool)
}
