//! CLI administration tool for trailpass.
//!
//! Provides commands for seeding reference data, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Seed regions, locales, and policies
//! cargo run --bin admin -- seed
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Seeding**: Idempotent upserts of regions, locales, and policies
//! - **Statistics**: Row counts per resource
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation dialogs via `dialoguer`
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use trailpass::infrastructure::persistence::seed::seed_reference_data;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing trailpass.
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
    /// Seed reference data (regions, locales, policies)
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Seed { yes } => handle_seed(&pool, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Seeds reference data with a confirmation prompt.
///
/// Seeding is idempotent: existing rows are updated in place, so running
/// the command twice leaves the database unchanged.
async fn handle_seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Reference Data".bright_blue().bold());
    println!();
    println!("  This will upsert regions, locales, and policies.");
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Seed reference data?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let summary = seed_reference_data(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed: {}", e))?;

    println!();
    println!("{}", "✅ Seeding complete!".green().bold());
    println!(
        "  Regions:  {}",
        summary.regions.to_string().bright_green().bold()
    );
    println!(
        "  Locales:  {}",
        summary.locales.to_string().bright_green().bold()
    );
    println!(
        "  Policies: {}",
        summary.policies.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows row counts for stages, passes, badges, notices, and users.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stages")
        .fetch_one(pool)
        .await?;

    let passes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM passes")
        .fetch_one(pool)
        .await?;

    let active_passes: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM passes WHERE status IN ('reserved', 'active')")
            .fetch_one(pool)
            .await?;

    let badges: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM badges")
        .fetch_one(pool)
        .await?;

    let notices: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notices")
        .fetch_one(pool)
        .await?;

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!(
        "  Stages:        {}",
        stages.to_string().bright_green().bold()
    );
    println!(
        "  Passes:        {} ({} active)",
        passes.to_string().bright_green().bold(),
        active_passes.to_string().bright_white()
    );
    println!(
        "  Badges:        {}",
        badges.to_string().bright_green().bold()
    );
    println!(
        "  Notices:       {}",
        notices.to_string().bright_green().bold()
    );
    println!(
        "  Users:         {}",
        users.to_string().bright_green().bold()
    );
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
