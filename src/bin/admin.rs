//! CLI administration tool for slug-shortener.
//!
//! Manages mappings directly against the database, through the same
//! validation rules as the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a mapping (slug is generated when omitted)
//! cargo run --bin admin -- link create https://example.com --slug example
//!
//! # Show where a slug points
//! cargo run --bin admin -- link get example
//!
//! # Point a slug somewhere else
//! cargo run --bin admin -- link update example https://example.org
//!
//! # Delete a mapping
//! cargo run --bin admin -- link delete example
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server: `DATABASE_URL`, or `DB_HOST`,
//! `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`.

use slug_shortener::application::services::LinkService;
use slug_shortener::config::Config;
use slug_shortener::infrastructure::persistence::PgLinkRepository;
use slug_shortener::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing slug-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage slug mappings
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new mapping
    Create {
        /// Target URL (http:// or https://)
        target: String,

        /// Slug to use (generated if not provided)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Show the target of a slug
    Get { slug: String },

    /// Replace the target of a slug
    Update { slug: String, target: String },

    /// Delete a mapping
    Delete {
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type PgLinkService = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;
    let service = LinkService::new(Arc::new(PgLinkRepository::with_timeout(
        Arc::new(pool.clone()),
        config.store_timeout(),
    )));

    let outcome = match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await,
        Commands::Db { action } => handle_db_action(action, &service).await,
    };

    pool.close().await;
    outcome
}

/// Dispatches mapping commands.
async fn handle_link_action(action: LinkAction, service: &PgLinkService) -> Result<()> {
    match action {
        LinkAction::Create { target, slug } => {
            let link = service
                .create_link(slug, target)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

            println!("{}", "✅ Link created".green().bold());
            println!("  Slug:   {}", link.slug.cyan());
            println!("  Target: {}", link.target.bright_white());
        }
        LinkAction::Get { slug } => {
            let link = service
                .get_link(&slug)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to get link: {}", e))?;

            println!("  {} → {}", link.slug.cyan(), link.target.bright_white());
        }
        LinkAction::Update { slug, target } => {
            let link = service
                .update_link(&slug, target)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to update link: {}", e))?;

            println!("{}", "✅ Link updated".green().bold());
            println!("  {} → {}", link.slug.cyan(), link.target.bright_white());
        }
        LinkAction::Delete { slug, yes } => {
            delete_link(service, slug, yes).await?;
        }
    }

    Ok(())
}

/// Deletes a mapping after showing it and asking for confirmation.
async fn delete_link(service: &PgLinkService, slug: String, skip_confirm: bool) -> Result<()> {
    let link = service
        .get_link(&slug)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get link: {}", e))?;

    println!("  {} → {}", link.slug.cyan(), link.target.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(&slug)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &PgLinkService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            service
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
