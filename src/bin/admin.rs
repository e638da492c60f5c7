//! CLI administration tool for bookmarks-api.
//!
//! Provides commands for inspecting and maintaining the bookmark store
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin bookmarks-admin -- stats
//!
//! # Delete a bookmark
//! cargo run --bin bookmarks-admin -- delete 5b4e2a3c-0c4f-4a8e-9d0a-2f6b1c7e8a11
//!
//! # Check database connection
//! cargo run --bin bookmarks-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL` or the `DB_*` components, as for the server. The in-memory
//! store has nothing to administer, so one of them is required.

use bookmarks_api::config::{Config, mask_connection_string};
use bookmarks_api::domain::repositories::BookmarkRepository;
use bookmarks_api::infrastructure::persistence::PgBookmarkRepository;
use bookmarks_api::validation::constraints::parse_uuid;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing bookmarks-api.
#[derive(Parser)]
#[command(name = "bookmarks-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show statistics
    Stats,

    /// Delete a bookmark by id
    Delete {
        /// Bookmark guid
        guid: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .context("DATABASE_URL or DB_USER/DB_PASSWORD/DB_NAME must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Delete { guid, yes } => delete_bookmark(&pool, guid, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays bookmark statistics.
///
/// Shows:
/// - Total number of bookmarks
/// - Number of favorites
/// - Oldest and newest creation time
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (total, favorites, oldest, newest): (
        i64,
        i64,
        Option<DateTime<Utc>>,
        Option<DateTime<Utc>>,
    ) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*),
            COUNT(*) FILTER (WHERE favorites),
            MIN(created_at),
            MAX(created_at)
        FROM bookmarks
        "#,
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Bookmarks: {}",
        total.to_string().bright_green().bold()
    );
    println!(
        "  Favorites: {}",
        favorites.to_string().bright_green().bold()
    );
    println!("  Oldest:    {}", format_time(oldest).bright_black());
    println!("  Newest:    {}", format_time(newest).bright_black());
    println!();

    Ok(())
}

fn format_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Deletes a bookmark after showing it.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
async fn delete_bookmark(pool: &PgPool, guid: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Bookmark".bright_blue().bold());
    println!();

    let guid = parse_uuid(&guid).map_err(|e| anyhow::anyhow!("{}", e))?;
    let repo = PgBookmarkRepository::new(Arc::new(pool.clone()));

    let bookmark = repo
        .find_by_id(guid)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Bookmark not found")?;

    println!("  Guid:        {}", bookmark.guid.to_string().bright_black());
    println!("  Link:        {}", bookmark.link.cyan());
    println!(
        "  Description: {}",
        bookmark.description.as_deref().unwrap_or("-")
    );
    println!(
        "  Created:     {}",
        format_time(Some(bookmark.created_at)).bright_black()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this bookmark?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.delete(guid)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete bookmark: {}", e))?;

    println!();
    println!("{}", "✅ Bookmark deleted".green().bold());
    println!();

    Ok(())
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

            let table_size: Option<String> = sqlx::query_scalar(
                "SELECT pg_size_pretty(pg_total_relation_size(to_regclass('bookmarks')))",
            )
            .fetch_one(pool)
            .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Bookmarks table: {}",
                table_size.as_deref().unwrap_or("missing").bright_white()
            );
            println!();
        }
    }

    Ok(())
}
