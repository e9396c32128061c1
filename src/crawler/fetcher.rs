//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the price check, including:
//! - Building the shared HTTP client with timeouts and user agent
//! - Single GET attempts and their classification
//! - The bounded retry loop that turns a target into a `PriceRecord`

use crate::config::FetchConfig;
use crate::crawler::extractor::extract_price;
use crate::crawler::record::PriceRecord;
use crate::crawler::retry::RetryPolicy;
use crate::state::AttemptState;
use crate::target::Target;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why a single attempt failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// The server answered with something other than 200
    #[error("HTTP {0}")]
    Status(u16),

    /// The request timed out
    #[error("request timeout")]
    Timeout,

    /// Connection, TLS or body transfer failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The target is not an absolute http(s) URL
    #[error("invalid URL {0}")]
    InvalidUrl(String),

    /// The client refused to build the request
    #[error("request could not be built: {0}")]
    Request(String),
}

/// Result of one fetch attempt
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server answered 200
    Success {
        /// Response body, decoded with the charset the server declared
        body: String,
        /// HTTP status code (always 200)
        status_code: u16,
    },

    /// The attempt failed but another one may succeed
    TransientFailure {
        /// What went wrong
        cause: FailureCause,
    },

    /// The attempt failed and repeating it cannot help
    FatalFailure {
        /// What went wrong
        cause: FailureCause,
    },
}

impl FetchOutcome {
    /// Wraps a failure cause as transient or fatal according to the policy
    pub fn failure(cause: FailureCause, policy: &RetryPolicy) -> Self {
        if policy.is_retryable(&cause) {
            Self::TransientFailure { cause }
        } else {
            Self::FatalFailure { cause }
        }
    }
}

/// Builds the HTTP client shared by every fetch task
///
/// The client pools connections, so it is built once per run and cloned
/// into each task.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use game_price_finder::config::FetchConfig;
/// use game_price_finder::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs a single GET attempt and classifies the result
///
/// Only HTTP 200 counts as success. Other statuses and transport errors
/// are failures; the policy decides whether they are transient or fatal.
pub async fn fetch_once(client: &Client, url: &Url, policy: &RetryPolicy) -> FetchOutcome {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => return FetchOutcome::failure(classify_error(&e), policy),
    };

    let status = response.status();
    if status != StatusCode::OK {
        return FetchOutcome::failure(FailureCause::Status(status.as_u16()), policy);
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Success {
            body,
            status_code: status.as_u16(),
        },
        Err(e) => FetchOutcome::failure(classify_error(&e), policy),
    }
}

/// Maps a reqwest error onto a failure cause
fn classify_error(error: &reqwest::Error) -> FailureCause {
    if error.is_timeout() {
        FailureCause::Timeout
    } else if error.is_builder() {
        FailureCause::Request(error.to_string())
    } else {
        FailureCause::Transport(error.to_string())
    }
}

/// Fetches a target with bounded retries and extracts its price
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 200 | Extract price → `Succeeded` |
/// | Other status | Retry immediately (4xx only if the policy allows) |
/// | Timeout / transport error | Retry immediately |
/// | Invalid URL / unbuildable request | Stop → `Exhausted` |
/// | Attempt bound reached | Stop → `Exhausted` |
///
/// # Returns
///
/// * `Some(PriceRecord)` - The page was fetched; the record may still carry
///   the `"0"` sentinel or an error-tagged price
/// * `None` - Every attempt failed; the target is dropped from the report
pub async fn fetch_with_retry(
    client: &Client,
    target: &Target,
    policy: &RetryPolicy,
) -> Option<PriceRecord> {
    let url = target.parse_url();
    let max_attempts = policy.max_attempts;
    let mut state = AttemptState::start();
    let mut record = None;

    while let Some(attempt) = state.attempt() {
        tracing::info!("Visiting {} (attempt {}/{})", target, attempt, max_attempts);

        let outcome = match &url {
            Ok(url) => fetch_once(client, url, policy).await,
            Err(reason) => FetchOutcome::FatalFailure {
                cause: FailureCause::InvalidUrl(reason.clone()),
            },
        };

        state = match outcome {
            FetchOutcome::Success { body, status_code } => {
                tracing::debug!(
                    "Fetched {} (HTTP {}, {} bytes)",
                    target,
                    status_code,
                    body.len()
                );
                let price = extract_price(&body);
                record = Some(PriceRecord::new(target, price));
                state.on_success()
            }
            FetchOutcome::TransientFailure { cause } => {
                tracing::warn!(
                    "Retry {}/{} failed for {}: {}",
                    attempt,
                    max_attempts,
                    target,
                    cause
                );
                state.on_retryable_failure(max_attempts)
            }
            FetchOutcome::FatalFailure { cause } => {
                tracing::warn!("Giving up on {}: {}", target, cause);
                state.on_fatal_failure()
            }
        };
    }

    if state == AttemptState::Exhausted {
        tracing::warn!("Failed to fetch {}, dropping it from the report", target);
    }

    record
}
