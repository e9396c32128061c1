//! The per-target report record

use crate::crawler::extractor::PriceResult;
use crate::target::Target;

/// Price field value used when a page lists no price
pub const PRICE_SENTINEL: &str = "0";

/// Prefix of the price field when the page markup could not be parsed
pub const ERROR_PREFIX: &str = "Error: ";

/// One row of the price report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    /// Product name, the last path segment of `link`
    pub name: String,

    /// Extracted price, the `"0"` sentinel, or an `"Error: ..."` string
    pub price: String,

    /// The target URL exactly as read from the input list
    pub link: String,
}

impl PriceRecord {
    /// Builds the record for a target from its extraction result
    pub fn new(target: &Target, price: PriceResult) -> Self {
        Self {
            name: target.name().to_string(),
            price: price.into_field(),
            link: target.as_str().to_string(),
        }
    }

    /// Returns true if the page was fetched but listed no price
    pub fn is_unpriced(&self) -> bool {
        self.price == PRICE_SENTINEL
    }

    /// Returns true if the price field carries a parse error
    pub fn has_parse_error(&self) -> bool {
        self.price.starts_with(ERROR_PREFIX)
    }
}
