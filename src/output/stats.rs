//! Batch statistics
//!
//! Counts derived from a finished batch, printed once the report is written.

use crate::crawler::BatchReport;

/// Batch statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStatistics {
    /// Targets read from the input, duplicates included
    pub submitted: usize,

    /// Duplicate targets collapsed before fetching
    pub duplicates: usize,

    /// Records written to the report
    pub recorded: usize,

    /// Targets dropped after exhausting their attempts
    pub dropped: usize,

    /// Tasks that panicked
    pub panicked: usize,

    /// Records carrying an extracted price
    pub priced: usize,

    /// Records with the `"0"` sentinel
    pub unpriced: usize,

    /// Records whose page could not be parsed
    pub parse_errors: usize,
}

impl BatchStatistics {
    /// Computes statistics from a batch report
    pub fn from_report(report: &BatchReport) -> Self {
        let unpriced = report.records.iter().filter(|r| r.is_unpriced()).count();
        let parse_errors = report
            .records
            .iter()
            .filter(|r| r.has_parse_error())
            .count();

        Self {
            submitted: report.submitted,
            duplicates: report.duplicates,
            recorded: report.records.len(),
            dropped: report.dropped,
            panicked: report.panicked,
            priced: report.records.len() - unpriced - parse_errors,
            unpriced,
            parse_errors,
        }
    }

    /// Share of unique targets that made it into the report, as a percentage
    pub fn success_rate(&self) -> f64 {
        let unique = self.submitted - self.duplicates;
        if unique == 0 {
            return 0.0;
        }
        (self.recorded as f64 / unique as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &BatchStatistics) {
    println!("=== Price Check Statistics ===\n");

    println!("Targets:");
    println!("  Submitted: {}", stats.submitted);
    if stats.duplicates > 0 {
        println!("  Duplicates skipped: {}", stats.duplicates);
    }
    println!("  Recorded: {}", stats.recorded);
    println!("  Dropped after retries: {}", stats.dropped);
    if stats.panicked > 0 {
        println!("  Failed tasks: {}", stats.panicked);
    }
    println!();

    println!("Records:");
    println!("  With price: {}", stats.priced);
    println!("  Without price: {}", stats.unpriced);
    println!("  Parse errors: {}", stats.parse_errors);
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} targets recorded)",
        stats.success_rate(),
        stats.recorded,
        stats.submitted - stats.duplicates
    );
}
