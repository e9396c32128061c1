//! Game Price Finder: a one-shot product page price checker
//!
//! This crate fetches a list of product pages concurrently, retries transient
//! failures, extracts the listed price from each page and writes a CSV report.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod target;

use thiserror::Error;

/// Main error type for Game Price Finder operations
///
/// Per-target failures never surface here; they are absorbed by the retry
/// loop and the batch orchestrator. These are the errors that stop a run.
#[derive(Debug, Error)]
pub enum PriceFinderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to read target list {path}: {source}")]
    TargetList {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Game Price Finder operations
pub type Result<T> = std::result::Result<T, PriceFinderError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{
    extract_price, fetch_with_retry, run_batch, PriceRecord, PriceResult, RetryPolicy,
};
pub use state::AttemptState;
pub use target::{load_targets, product_name, Target};
