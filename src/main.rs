//! Site-Finder main entry point
//!
//! This is the command-line interface for the Site-Finder enrichment job.

use anyhow::Context;
use clap::Parser;
use site_finder::config::{load_config, Config};
use site_finder::driver::print_store_counts;
use site_finder::storage::{RecordStore, SqliteStorage};
use site_finder::{Driver, UrlResolver};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Site-Finder: find company websites for stored company names
///
/// Looks up every pending company record with a web search, prefers the
/// website declared on the company's professional-network profile, falls
/// back to the first search result that looks like a home page, and writes
/// the result (or an explicit null) back to the record store.
#[derive(Parser, Debug)]
#[command(name = "site-finder")]
#[command(version = "1.0.0")]
#[command(about = "Find company websites for stored company names", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override driver.max-workers from the config file
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=500))]
    max_workers: Option<u16>,

    /// Add company names (one per line) to the record store and exit
    #[arg(long, value_name = "FILE", conflicts_with_all = ["stats", "dry_run"])]
    import: Option<PathBuf>,

    /// Show record store statistics and exit
    #[arg(long, conflicts_with_all = ["import", "dry_run"])]
    stats: bool,

    /// Validate config and show what would be processed without searching
    #[arg(long, conflicts_with_all = ["import", "stats"])]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let mut config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(workers) = cli.max_workers {
        config.driver.max_workers = usize::from(workers);
    }

    if let Some(path) = &cli.import {
        handle_import(&config, path)
    } else if cli.stats {
        handle_stats(&config)
    } else if cli.dry_run {
        handle_dry_run(&config)
    } else {
        handle_run(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_finder=info,warn"),
            1 => EnvFilter::new("site_finder=debug,info"),
            2 => EnvFilter::new("site_finder=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn open_store(config: &Config) -> anyhow::Result<SqliteStorage> {
    let path = Path::new(&config.store.database_path);
    SqliteStorage::new(path)
        .with_context(|| format!("Failed to open record store {}", path.display()))
}

/// Handles --import: adds company names from a text file
fn handle_import(config: &Config, path: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut storage = open_store(config)?;
    let inserted = storage.import_names(&text)?;

    println!(
        "✓ Imported {} company names into {}",
        inserted, config.store.database_path
    );
    Ok(())
}

/// Handles --stats: shows record counts from the store
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}\n", config.store.database_path);

    let storage = open_store(config)?;
    print_store_counts(&storage.counts()?);

    Ok(())
}

/// Handles --dry-run: validates config and shows what would be processed
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Site-Finder Dry Run ===\n");

    println!("Search:");
    println!("  Endpoint: {}", config.search.endpoint);
    match config.search.resolve_api_key() {
        Ok(_) => println!("  API key: configured"),
        Err(e) => println!("  API key: MISSING ({})", e),
    }

    println!("\nProfile scraping:");
    println!("  Profile links containing: {}", config.profile.domain);
    println!("  Container selector: {}", config.profile.container_selector);
    println!("  Link selector: {}", config.profile.link_selector);
    println!("  Ignored link text: {}", config.profile.placeholder);

    println!("\nHTTP:");
    println!("  Request timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);

    println!("\nDriver:");
    println!("  Max workers: {}", config.driver.max_workers);

    let storage = open_store(config)?;
    let pending = storage.pending_records()?;
    println!("\nStore: {}", config.store.database_path);
    println!("  Pending records: {}", pending.len());

    println!("\n✓ Configuration is valid");
    Ok(())
}

/// Handles the main enrichment run
async fn handle_run(config: Config) -> anyhow::Result<()> {
    let resolver = UrlResolver::from_config(&config).context("Failed to build resolver")?;
    let storage = open_store(&config)?;

    let driver = Driver::new(
        Arc::new(resolver),
        Arc::new(Mutex::new(storage)),
        config.driver.max_workers,
    );

    match driver.run().await {
        Ok(summary) => {
            tracing::info!(
                "Run completed: {} of {} processed records have a website",
                summary.resolved,
                summary.processed()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            Err(e.into())
        }
    }
}
