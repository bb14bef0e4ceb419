//! CLI administration tool for shortkey.
//!
//! Manages short links directly against the configured store, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin shortkey-admin -- list
//!
//! # Shorten a URL, expiring in one day
//! cargo run --bin shortkey-admin -- create https://example.com --expires-in 86400
//!
//! # Point a specific key at a URL (overwrites)
//! cargo run --bin shortkey-admin -- set aB3dE5fG7hJ9kL1m https://example.com
//!
//! # Delete a link
//! cargo run --bin shortkey-admin -- delete aB3dE5fG7hJ9kL1m
//!
//! # Check the store
//! cargo run --bin shortkey-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `shortkey::config`. `STORE_BACKEND=memory` works
//! but is only useful for trying the commands out.

use shortkey::application::services::LinkService;
use shortkey::config::{self, Config};
use shortkey::infrastructure::persistence::open_store;

use anyhow::Result;
use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// Host used when printing short URLs from the CLI.
const DEFAULT_DISPLAY_HOST: &str = "localhost:5000";

/// CLI tool for managing shortkey links.
#[derive(Parser)]
#[command(name = "shortkey-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all links
    List,

    /// Shorten a URL under a generated key
    Create {
        /// Target URL (http or https)
        url: String,

        /// Lifetime in seconds
        #[arg(short, long)]
        expires_in: Option<i64>,

        /// Host to print the short URL with
        #[arg(long, default_value = DEFAULT_DISPLAY_HOST)]
        host: String,
    },

    /// Point a chosen key at a URL, replacing any existing link
    Set {
        /// 16-character alphanumeric key
        key: String,

        /// Target URL (http or https)
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete a link
    Delete {
        /// Key to delete
        key: String,

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
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let service = connect(&config).await?;

    match cli.command {
        Commands::List => list_links(&service).await?,
        Commands::Create {
            url,
            expires_in,
            host,
        } => create_link(&service, url, expires_in, &host).await?,
        Commands::Set { key, url, yes } => set_link(&service, &key, url, yes).await?,
        Commands::Delete { key, yes } => delete_link(&service, &key, yes).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<LinkService> {
    let store = open_store(config).await?;
    Ok(LinkService::new(store))
}

/// Lists all live links.
///
/// # Output Format
///
/// ```text
/// Short links
///
///   Key               URL                                      Count   Created
///   ───────────────────────────────────────────────────────────────────────────
///   aB3dE5fG7hJ9kL1m  https://example.com                      12      2025-01-15 10:30
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "Short links".bright_blue().bold());
    println!();

    let mut links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} create <url>",
            "shortkey-admin".bright_cyan()
        );
        return Ok(());
    }

    links.sort_by_key(|link| link.created_at);

    println!(
        "  {:<17} {:<40} {:<7} {:<16}",
        "Key".bright_white().bold(),
        "URL".bright_white().bold(),
        "Count".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(83).bright_black());

    for link in &links {
        println!(
            "  {:<17} {:<40} {:<7} {}",
            link.key.cyan(),
            truncate(&link.target_url, 40),
            link.access_count.to_string().bright_green(),
            format_timestamp(link.created_at).bright_black()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shortens a URL under a freshly generated key.
async fn create_link(
    service: &LinkService,
    url: String,
    expires_in: Option<i64>,
    host: &str,
) -> Result<()> {
    let link = service
        .create_short_link(url, expires_in)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✓ Link created".green().bold());
    println!();
    println!("  Key:       {}", link.key.cyan());
    println!("  URL:       {}", link.target_url);
    println!(
        "  Short URL: {}",
        service.get_short_url(host, &link.key).bright_yellow()
    );
    if let Some(expires_at) = link.expires_at {
        println!("  Expires:   {}", format_timestamp(expires_at));
    }
    println!();

    Ok(())
}

/// Writes a link under a chosen key.
///
/// Overwrites an existing link (and resets its count), so it asks first
/// unless `--yes` is given.
async fn set_link(service: &LinkService, key: &str, url: String, skip_confirm: bool) -> Result<()> {
    println!("  Key: {}", key.cyan());
    println!("  URL: {}", url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Write this link? An existing link under this key is replaced")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "✗ Cancelled".red());
            return Ok(());
        }
    }

    service
        .set_link(key, url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to set link: {}", e))?;

    println!("{}", "✓ Link saved".green().bold());
    Ok(())
}

/// Deletes a link with confirmation prompt (default: No).
async fn delete_link(service: &LinkService, key: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link {}?", key))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "✗ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(key)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✓ Link deleted".green().bold());
    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &LinkService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking store connection...".bright_blue());

            if !service.health_check().await {
                anyhow::bail!("Store is not reachable");
            }

            println!("{}", "✓ Store connection OK".green().bold());
        }
    }

    Ok(())
}

fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| secs.to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }

    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
