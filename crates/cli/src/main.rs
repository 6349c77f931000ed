//! Nuru Skincare CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! nuru-cli migrate
//!
//! # Seed the catalog and site content
//! nuru-cli seed
//!
//! # Create an admin user
//! nuru-cli admin create -e admin@nuruskincare.com -n "Store Admin" -p changemeplease
//!
//! # Drop expired auth tokens
//! nuru-cli tokens purge
//! ```
//!
//! All commands read `NURU_DATABASE_URL` (or `DATABASE_URL`) from the
//! environment or a `.env` file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "nuru-cli")]
#[command(author, version, about = "Nuru Skincare CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the catalog if it is empty
    Seed,
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Manage auth tokens
    Tokens {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Initial password (change it after first login)
        #[arg(short, long)]
        password: String,

        /// Country, used for currency defaults
        #[arg(short, long, default_value = "Kenya")]
        country: String,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Delete expired auth tokens
    Purge,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
                country,
            } => {
                commands::admin::create(&email, &name, &password, &country).await?;
            }
        },
        Commands::Tokens { action } => match action {
            TokenAction::Purge => commands::tokens::purge().await?,
        },
    }
    Ok(())
}
