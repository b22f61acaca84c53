//! CSV output of a finished report
//!
//! The header is the union of all row keys (`user_id`, `sum`, then the
//! category columns alphabetically). Users are written in ascending id order;
//! a column the user never saw is left empty.
//!
//! All functions write to a caller-provided writer (no file handling here).

use crate::types::{Report, ReportError};
use csv::Writer;
use std::io::Write;

/// Write a report in CSV format
///
/// An empty report produces empty output (no header line).
///
/// # Arguments
///
/// * `report` - The finished report
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ReportError::WriteError)` if a write error occurred
pub fn write_report_csv(report: &Report, output: &mut dyn Write) -> Result<(), ReportError> {
    let columns = report.columns();
    if columns.is_empty() {
        return Ok(());
    }

    let mut writer = Writer::from_writer(output);
    writer.write_record(&columns)?;

    for (_, row) in report.rows() {
        writer.write_record(columns.iter().map(|column| {
            row.get(column)
                .map(|value| value.to_string())
                .unwrap_or_default()
        }))?;
    }

    writer
        .flush()
        .map_err(|e| ReportError::write(format!("Failed to flush CSV output: {}", e)))?;

    Ok(())
}
