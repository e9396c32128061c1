use serde::Deserialize;

/// Default number of attempts per target
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Main configuration structure for Game Price Finder
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Fetch and retry behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Attempts per target before it is given up on
    #[serde(rename = "max-attempts")]
    pub max_attempts: u32,

    /// Whole-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Retry 4xx responses like any other failure
    #[serde(rename = "retry-client-errors")]
    pub retry_client_errors: bool,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            retry_client_errors: true,
            user_agent: format!("game-price-finder/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Where the target list is read from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the line-delimited URL list
    #[serde(rename = "targets-path")]
    pub targets_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            targets_path: "./games_list.txt".to_string(),
        }
    }
}

/// Where the report is written
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV report
    #[serde(rename = "report-path")]
    pub report_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: "./games_prices.csv".to_string(),
        }
    }
}
