//! Output module for writing the price report
//!
//! This module handles:
//! - Writing surviving price records as a CSV table
//! - Summarizing and printing batch statistics

mod csv_report;
pub mod stats;
mod traits;

pub use csv_report::{format_report, write_report_file, CsvReportWriter, REPORT_HEADERS};
pub use stats::{print_statistics, BatchStatistics};
pub use traits::{OutputError, OutputResult, ReportWriter};
