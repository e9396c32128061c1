//! Price extraction from product page markup
//!
//! The page is parsed with a full HTML5 parser and the first table cell
//! carrying both the `price` and `js-price` classes is taken as the price.

use crate::crawler::record::{ERROR_PREFIX, PRICE_SENTINEL};
use scraper::{Html, Selector};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// CSS selector for the price cell
pub const PRICE_SELECTOR: &str = "td.price.js-price";

/// Outcome of a price extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceResult {
    /// The price cell was found; holds its trimmed text
    Found(String),

    /// The page has no price cell
    NotFound,

    /// The markup could not be parsed; holds the failure description
    ParseError(String),
}

impl PriceResult {
    /// Converts the result into the report's price field
    ///
    /// `NotFound` becomes the `"0"` sentinel and `ParseError` becomes an
    /// `"Error: ..."` string.
    pub fn into_field(self) -> String {
        match self {
            Self::Found(price) => price,
            Self::NotFound => PRICE_SENTINEL.to_string(),
            Self::ParseError(message) => format!("{}{}", ERROR_PREFIX, message),
        }
    }
}

/// Extracts the price from page markup
///
/// Never panics and never returns an error: a failure inside the parser is
/// reported as `PriceResult::ParseError`.
///
/// # Example
///
/// ```
/// use game_price_finder::crawler::{extract_price, PriceResult};
///
/// let html = r#"<table><tr><td class="price js-price"> 19,99€ </td></tr></table>"#;
/// assert_eq!(extract_price(html), PriceResult::Found("19,99€".to_string()));
/// ```
pub fn extract_price(markup: &str) -> PriceResult {
    match panic::catch_unwind(AssertUnwindSafe(|| find_price(markup))) {
        Ok(Ok(Some(price))) => PriceResult::Found(price),
        Ok(Ok(None)) => PriceResult::NotFound,
        Ok(Err(message)) => PriceResult::ParseError(message),
        Err(payload) => PriceResult::ParseError(panic_message(payload.as_ref())),
    }
}

fn find_price(markup: &str) -> Result<Option<String>, String> {
    let selector = Selector::parse(PRICE_SELECTOR)
        .map_err(|e| format!("invalid price selector: {:?}", e))?;
    let document = Html::parse_document(markup);

    Ok(document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("parser failed: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("parser failed: {}", message)
    } else {
        "parser failed".to_string()
    }
}
