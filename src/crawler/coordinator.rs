//! Batch coordinator - fan-out/fan-in over all targets
//!
//! Every target gets its own spawned task running the retry loop. All tasks
//! are spawned before any is awaited, then the batch waits for every one of
//! them. Tasks are isolated: a panic in one is logged and counted, and the
//! rest of the batch carries on.

use crate::config::FetchConfig;
use crate::crawler::fetcher::{build_http_client, fetch_with_retry};
use crate::crawler::record::PriceRecord;
use crate::crawler::retry::RetryPolicy;
use crate::target::{dedupe_targets, Target};
use reqwest::Client;
use tokio::task::JoinHandle;

/// What happened to a batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Records that survived, in submission order
    pub records: Vec<PriceRecord>,

    /// Number of targets in the input, duplicates included
    pub submitted: usize,

    /// Repeated targets that were collapsed before fetching
    pub duplicates: usize,

    /// Targets whose attempts were all exhausted
    pub dropped: usize,

    /// Tasks that panicked instead of finishing
    pub panicked: usize,
}

/// Main batch coordinator structure
///
/// Holds the single HTTP client shared by every fetch task, and the retry
/// policy each task runs under.
#[derive(Debug, Clone)]
pub struct Coordinator {
    client: Client,
    policy: RetryPolicy,
}

impl Coordinator {
    /// Creates a coordinator, building its HTTP client from the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(PriceFinderError)` - The HTTP client could not be built
    pub fn new(config: &FetchConfig) -> crate::Result<Self> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, RetryPolicy::from_config(config)))
    }

    /// Creates a coordinator around an existing client
    pub fn with_client(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Runs the batch and returns only the surviving records
    pub async fn run(&self, targets: Vec<Target>) -> Vec<PriceRecord> {
        self.run_with_report(targets).await.records
    }

    /// Runs the batch and returns the records along with batch counters
    ///
    /// 1. Collapse duplicate targets
    /// 2. Spawn one fetch task per target
    /// 3. Wait for all tasks
    /// 4. Drop targets that yielded no record
    pub async fn run_with_report(&self, targets: Vec<Target>) -> BatchReport {
        let submitted = targets.len();
        let (targets, duplicates) = dedupe_targets(targets);
        if duplicates > 0 {
            tracing::info!("Skipping {} duplicate targets", duplicates);
        }

        tracing::info!("Fetching {} targets", targets.len());
        let start_time = std::time::Instant::now();

        let handles: Vec<(Target, JoinHandle<Option<PriceRecord>>)> = targets
            .into_iter()
            .map(|target| {
                let client = self.client.clone();
                let policy = self.policy;
                let task_target = target.clone();
                let handle = tokio::spawn(async move {
                    fetch_with_retry(&client, &task_target, &policy).await
                });
                (target, handle)
            })
            .collect();

        let unique = handles.len();
        let (records, panicked) = collect_isolated(handles).await;
        let dropped = unique - records.len() - panicked;

        tracing::info!(
            "Batch completed: {} records from {} targets in {:?}",
            records.len(),
            unique,
            start_time.elapsed()
        );

        BatchReport {
            records,
            submitted,
            duplicates,
            dropped,
            panicked,
        }
    }
}

/// Awaits every task handle and keeps the values of those that produced one
///
/// A task that panicked is logged and skipped, so one failing task never
/// aborts its siblings or the batch.
///
/// # Returns
///
/// The produced values in handle order, and the number of panicked tasks
pub async fn collect_isolated<T>(
    handles: Vec<(Target, JoinHandle<Option<T>>)>,
) -> (Vec<T>, usize) {
    let mut values = Vec::with_capacity(handles.len());
    let mut panicked = 0;

    for (target, handle) in handles {
        match handle.await {
            Ok(Some(value)) => values.push(value),
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Fetch task for {} failed: {}", target, e);
                panicked += 1;
            }
        }
    }

    (values, panicked)
}

/// Runs a price check batch over the given targets
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `targets` - The targets to check
/// * `policy` - Retry policy for each target
///
/// # Returns
///
/// The records of every target that was fetched successfully
///
/// # Example
///
/// ```no_run
/// use game_price_finder::config::FetchConfig;
/// use game_price_finder::crawler::{build_http_client, run_batch, RetryPolicy};
/// use game_price_finder::Target;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = build_http_client(&FetchConfig::default())?;
/// let targets = vec![Target::new("https://shop.example/game/celeste")];
/// let records = run_batch(&client, targets, RetryPolicy::default()).await;
/// # Ok(())
/// # }
/// ```
pub async fn run_batch(
    client: &Client,
    targets: Vec<Target>,
    policy: RetryPolicy,
) -> Vec<PriceRecord> {
    Coordinator::with_client(client.clone(), policy)
        .run(targets)
        .await
}
