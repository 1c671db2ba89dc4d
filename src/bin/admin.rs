//! CLI administration tool for url-alias.
//!
//! Creates and resolves aliases and inspects the database without going
//! through the HTTP API. Reads the same environment as the server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/page
//!
//! # Resolve an alias
//! cargo run --bin admin -- resolve q3Zk_a9BcD
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//! ```
//!
//! With `STORAGE=memory` the shorten and resolve commands work against a
//! throwaway store, which is only useful for trying out the alias settings.

use url_alias::config::{self, Config, StorageBackend};
use url_alias::infrastructure::persistence::pool;
use url_alias::server::build_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create (or look up) the short URL for a long URL
    Shorten {
        /// Absolute URL to shorten
        url: String,
    },

    /// Print the long URL stored under an alias
    Resolve {
        /// Alias to resolve
        alias: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Shorten { url } => shorten(&config, &url).await?,
        Commands::Resolve { alias } => resolve(&config, &alias).await?,
        Commands::Db { action } => {
            let pool = connect(&config).await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

fn warn_if_ephemeral(config: &Config) {
    if config.storage == StorageBackend::Memory {
        println!(
            "{}",
            "⚠️  STORAGE=memory: results are not persisted".yellow()
        );
        println!();
    }
}

/// Creates or looks up the alias for `url` and prints the short URL.
async fn shorten(config: &Config, url: &str) -> Result<()> {
    warn_if_ephemeral(config);

    let service = build_service(config).await?;
    let record = service
        .create_or_get_record(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short URL ready".green().bold());
    println!();
    println!("  Long URL:  {}", record.long_url.cyan());
    println!("  Alias:     {}", record.alias.bright_yellow().bold());
    println!(
        "  Short URL: {}",
        service.short_url(&record.alias).bright_white().bold()
    );
    println!(
        "  Created:   {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Prints the long URL stored under `alias`.
async fn resolve(config: &Config, alias: &str) -> Result<()> {
    warn_if_ephemeral(config);

    let service = build_service(config).await?;
    let record = service
        .get_by_alias(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve alias '{}': {}", alias, e))?;

    println!("  Alias:    {}", record.alias.bright_yellow());
    println!("  Long URL: {}", record.long_url.cyan());
    println!("  ID:       {}", record.id.to_string().bright_black());
    println!();

    Ok(())
}

/// Opens the PostgreSQL pool for the `db` commands.
async fn connect(config: &Config) -> Result<PgPool> {
    let db = config
        .database
        .as_ref()
        .context("db commands require STORAGE=postgresql and a database configuration")?;

    pool::connect(db)
        .await
        .context("Failed to connect to database")
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            let last_id: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(id), 0) FROM urls")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  URLs:       {}",
                urls_count.to_string().bright_green().bold()
            );
            println!(
                "  Last id:    {}",
                last_id.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
