//! Output handler traits and types

use crate::crawler::PriceRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for report writers
///
/// A report writer receives the full set of surviving records once the batch
/// has finished. It must always emit the table header, even for an empty
/// batch.
pub trait ReportWriter {
    /// Writes the header and one row per record
    ///
    /// # Arguments
    ///
    /// * `records` - The records to write, in report order
    fn write_report(&mut self, records: &[PriceRecord]) -> OutputResult<()>;
}
