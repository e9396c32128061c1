//! Configuration module for Game Price Finder
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; a missing file section falls back to the defaults that
//! reproduce the classic `games_list.txt` → `games_prices.csv` run.
//!
//! # Example
//!
//! ```no_run
//! use game_price_finder::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("price-finder.toml")).unwrap();
//! println!("Each target gets {} attempts", config.fetch.max_attempts);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, InputConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
