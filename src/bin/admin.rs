//! CLI administration tool for hashlink.
//!
//! Reads the SQLite store directly, without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Show the hit count of one short code
//! cargo run --bin admin -- stats 47DEQpj8
//!
//! # List the most visited short URLs
//! cargo run --bin admin -- top --limit 20
//!
//! # Check database connection and migrations
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default: `sqlite://urls.db`)
//! - `BASE_URL`: Prefix used when printing short URLs

use hashlink::application::services::UrlService;
use hashlink::config::{self, Config};
use hashlink::infrastructure::persistence::{MIGRATOR, SqliteUrlRepository, connect};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for inspecting hashlink storage.
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
    /// Show statistics for one short code
    Stats {
        /// Short code to look up
        code: String,
    },

    /// List the most visited short URLs
    Top {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
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
    /// Check database connection and apply pending migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect(&config.database_url, 1)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let service = UrlService::new(
        Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone()))),
        config.code_policy,
        config.code_max_attempts,
    );

    match cli.command {
        Commands::Stats { code } => show_stats(&service, &config, &code).await?,
        Commands::Top { limit } => show_top(&service, &config, limit).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    pool.close().await;

    Ok(())
}

/// Prints the mapping and hit count of a single short code.
async fn show_stats(service: &UrlService, config: &Config, code: &str) -> Result<()> {
    println!("{}", "Short URL statistics".bright_blue().bold());
    println!();

    let hits = match service.hits(code).await {
        Ok(hits) => hits,
        Err(e) => {
            println!("  {}", e.to_string().red());
            return Ok(());
        }
    };

    println!(
        "  Short URL: {}",
        service.short_url(&config.base_url, code).cyan()
    );
    println!("  Hits:      {}", hits.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Lists the most visited short URLs.
///
/// # Output Format
///
/// ```text
/// Top short URLs
///
///   Code       Hits     Created            URL
///   ───────────────────────────────────────────────────────────────
///   47DEQpj8   12       2024-01-15 10:30   https://example.com/
/// ```
async fn show_top(service: &UrlService, config: &Config, limit: i64) -> Result<()> {
    println!("{}", "Top short URLs".bright_blue().bold());
    println!();

    let mappings = service
        .top(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No short URLs yet".yellow());
        println!();
        println!("  Create one at {}", config.base_url.bright_cyan());
        return Ok(());
    }

    println!(
        "  {:<10} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Hits".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(63).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<10} {:<8} {:<18} {}",
            mapping.short_code.cyan(),
            mapping.hits.to_string().bright_green(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url
        );
    }

    let total = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count short URLs: {}", e))?;

    println!();
    println!(
        "  Showing {} of {}",
        mappings.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Database:   {}", config.database_url.bright_white());
            println!("  SQLite:     {}", version.bright_white());
            println!("  Short URLs: {}", urls_count.to_string().bright_green().bold());
        }
    }

    Ok(())
}
