//! CSV report generation
//!
//! The report has exactly three columns, `Game`, `Price (Euro)` and `Link`,
//! with CRLF line endings. Values are written verbatim and quoted only when
//! they contain a delimiter, quote or line break.

use crate::crawler::PriceRecord;
use crate::output::traits::{OutputError, OutputResult, ReportWriter};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column headers of the price report, in order
pub const REPORT_HEADERS: [&str; 3] = ["Game", "Price (Euro)", "Link"];

/// Report writer producing CSV into any `Write` sink
pub struct CsvReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvReportWriter<File> {
    /// Creates (or truncates) the report file at `path`
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> CsvReportWriter<W> {
    /// Wraps an arbitrary sink
    pub fn from_writer(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(sink);
        Self { writer }
    }

    /// Flushes and returns the underlying sink
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_report(&mut self, records: &[PriceRecord]) -> OutputResult<()> {
        self.writer.write_record(REPORT_HEADERS)?;

        for record in records {
            self.writer.write_record([
                record.name.as_str(),
                record.price.as_str(),
                record.link.as_str(),
            ])?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the price report to a file
///
/// # Arguments
///
/// * `records` - The surviving records
/// * `output_path` - Path where the CSV file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to write the report
pub fn write_report_file(records: &[PriceRecord], output_path: &Path) -> OutputResult<()> {
    let mut writer = CsvReportWriter::create(output_path)?;
    writer.write_report(records)?;
    writer.into_inner()?.sync_all()?;
    Ok(())
}

/// Formats the price report as a CSV string
pub fn format_report(records: &[PriceRecord]) -> OutputResult<String> {
    let mut writer = CsvReportWriter::from_writer(Vec::new());
    writer.write_report(records)?;
    let bytes = writer.into_inner()?;

    String::from_utf8(bytes).map_err(|e| OutputError::Format(e.to_string()))
}
