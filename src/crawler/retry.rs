//! Retry policy for the per-target fetch loop
//!
//! Retries are immediate: there is no delay, backoff or jitter between
//! attempts. The policy only bounds the attempt count and decides which
//! failure causes are worth another attempt.

use crate::config::FetchConfig;
use crate::crawler::fetcher::FailureCause;

/// Retry configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts per target (at least 1)
    pub max_attempts: u32,

    /// Whether 4xx responses are retried like any other failure
    pub retry_client_errors: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_client_errors: true,
        }
    }
}

impl RetryPolicy {
    /// Creates the default policy: three attempts, every failure retried
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a policy from the fetch configuration
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new()
            .with_max_attempts(config.max_attempts)
            .with_retry_client_errors(config.retry_client_errors)
    }

    /// Sets the maximum attempts (values below 1 are raised to 1)
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Sets whether 4xx responses are retried
    pub fn with_retry_client_errors(mut self, retry: bool) -> Self {
        self.retry_client_errors = retry;
        self
    }

    /// Decides whether a failed attempt may be repeated
    pub fn is_retryable(&self, cause: &FailureCause) -> bool {
        match cause {
            FailureCause::Status(code) if (400..500).contains(code) => self.retry_client_errors,
            FailureCause::Status(_) | FailureCause::Timeout | FailureCause::Transport(_) => true,
            FailureCause::InvalidUrl(_) | FailureCause::Request(_) => false,
        }
    }
}
