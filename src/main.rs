//! Game Price Finder main entry point
//!
//! This is the command-line interface for the one-shot product page price check.

use anyhow::Context;
use clap::Parser;
use game_price_finder::config::{load_config, validate, Config};
use game_price_finder::crawler::Coordinator;
use game_price_finder::output::{print_statistics, write_report_file, BatchStatistics};
use game_price_finder::target::load_targets;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Game Price Finder: checks listed prices on a batch of product pages
///
/// Reads one product page URL per line, fetches every page concurrently,
/// extracts the listed price and writes a CSV report. With no arguments it
/// reads ./games_list.txt and writes ./games_prices.csv.
#[derive(Parser, Debug)]
#[command(name = "game-price-finder")]
#[command(version)]
#[command(about = "Checks listed prices on a batch of product pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Target list (one URL per line), overrides the config file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// CSV report path, overrides the config file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Attempts per target, overrides the config file
    #[arg(long, value_name = "N")]
    max_attempts: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    let targets_path = Path::new(&config.input.targets_path);
    let report_path = Path::new(&config.output.report_path);

    tracing::info!("Reading targets from: {}", targets_path.display());
    let targets = load_targets(targets_path).context("failed to load target list")?;
    tracing::info!(
        "Loaded {} targets, {} attempts each",
        targets.len(),
        config.fetch.max_attempts
    );

    let coordinator =
        Coordinator::new(&config.fetch).context("failed to build the HTTP client")?;
    let report = coordinator.run_with_report(targets).await;

    write_report_file(&report.records, report_path)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;
    tracing::info!(
        "Wrote {} rows to {}",
        report.records.len(),
        report_path.display()
    );

    if !cli.quiet {
        print_statistics(&BatchStatistics::from_report(&report));
    }

    Ok(())
}

/// Loads the config file, if any, and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(input) = &cli.input {
        config.input.targets_path = input.display().to_string();
    }
    if let Some(output) = &cli.output {
        config.output.report_path = output.display().to_string();
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.fetch.max_attempts = max_attempts;
    }

    validate(&config).context("invalid configuration")?;

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("game_price_finder=info,warn"),
            1 => EnvFilter::new("game_price_finder=debug,info"),
            2 => EnvFilter::new("game_price_finder=trace,debug"),
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
