//! Target handling for Game Price Finder
//!
//! A target is one product page URL taken from the input list. This module
//! reads the list, derives product names from URLs and checks that a target
//! is something a request can be built for.

mod list;

pub use list::{dedupe_targets, load_targets, parse_targets};

use std::fmt;
use url::Url;

/// One product page to price-check
///
/// The string is kept exactly as read (after trimming); no normalization is
/// applied, so the report's `Link` column echoes the input line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Creates a target from a raw URL string
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL as read from the input list
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Product name derived from the URL's final path segment
    pub fn name(&self) -> &str {
        product_name(&self.0)
    }

    /// Parses the target as an absolute http(s) URL
    ///
    /// # Returns
    ///
    /// * `Ok(Url)` - The target can be requested
    /// * `Err(String)` - Why the target can never be fetched
    pub fn parse_url(&self) -> Result<Url, String> {
        let url = Url::parse(&self.0).map_err(|e| format!("{}: {}", self.0, e))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(format!("{}: unsupported scheme '{}'", self.0, other)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Target {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for Target {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

/// Derives a product name from a URL
///
/// The name is the substring after the last `/`. A URL ending in `/` yields
/// an empty name, and a string with no `/` is returned whole.
///
/// # Examples
///
/// ```
/// use game_price_finder::product_name;
///
/// assert_eq!(product_name("https://shop.example/games/hollow-knight"), "hollow-knight");
/// assert_eq!(product_name("https://shop.example/games/"), "");
/// ```
pub fn product_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
