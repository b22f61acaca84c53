//! JSON output of a finished report
//!
//! The report is rendered as a tab-indented array of row objects, one per
//! user, in ascending user id order.

use crate::types::{Report, ReportError, ReportRow};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Write a report as a JSON array of rows
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ReportError::WriteError)` if serialization or writing failed
pub fn write_report_json(report: &Report, output: &mut dyn Write) -> Result<(), ReportError> {
    let rows: Vec<&ReportRow> = report.rows().into_iter().map(|(_, row)| row).collect();

    let mut serializer =
        serde_json::Serializer::with_formatter(&mut *output, PrettyFormatter::with_indent(b"\t"));
    rows.serialize(&mut serializer)
        .map_err(|e| ReportError::write(format!("Failed to serialize report: {}", e)))?;

    writeln!(output)
        .and_then(|_| output.flush())
        .map_err(|e| ReportError::write(format!("Failed to write JSON output: {}", e)))
}
