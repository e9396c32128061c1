//! Crawler module for product page fetching and price extraction
//!
//! This module contains the core of the price check:
//! - HTTP fetching with a bounded retry loop
//! - Structural price extraction from page markup
//! - Concurrent fan-out over all targets with a single fan-in

mod coordinator;
mod extractor;
mod fetcher;
mod record;
mod retry;

pub use coordinator::{collect_isolated, run_batch, BatchReport, Coordinator};
pub use extractor::{extract_price, PriceResult, PRICE_SELECTOR};
pub use fetcher::{build_http_client, fetch_once, fetch_with_retry, FailureCause, FetchOutcome};
pub use record::{PriceRecord, ERROR_PREFIX, PRICE_SENTINEL};
pub use retry::RetryPolicy;
