//! I/O module
//!
//! Handles JSON input and report output.
//!
//! # Components
//!
//! - `json_stream` - Pull-based cursor over a JSON array of transactions
//! - `csv_format` - CSV report output
//! - `json_format` - JSON report output
//! - `sqlite` - SQLite report output
//!
//! [`ReportFormat`] selects one of the three writers by name and takes care of
//! the output file itself.

use crate::types::{Report, ReportError};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use std::str::FromStr;

pub mod csv_format;
pub mod json_format;
pub mod json_stream;
pub mod sqlite;

pub use csv_format::write_report_csv;
pub use json_format::write_report_json;
pub use json_stream::TransactionStream;
pub use sqlite::write_report_sqlite;

/// Open the input file for reading
///
/// # Errors
///
/// * `FileNotFound` if nothing exists at `path`
/// * `ReadError` for any other failure (permissions, directory, ...)
pub fn open_input(path: &Path) -> Result<File, ReportError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ReportError::ReadError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Csv,
    Json,
    Sqlite,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Csv, ReportFormat::Json, ReportFormat::Sqlite];

    /// Selector name of this format
    pub fn name(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Sqlite => "sqlite",
        }
    }

    /// Write `report` to the file at `path`
    ///
    /// Missing parent directories are created. An existing CSV or JSON file is
    /// overwritten; an existing SQLite database has its report tables replaced.
    pub fn write(&self, report: &Report, path: &Path) -> Result<(), ReportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ReportError::write(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        match self {
            ReportFormat::Csv => write_file(path, |output| write_report_csv(report, output)),
            ReportFormat::Json => write_file(path, |output| write_report_json(report, output)),
            ReportFormat::Sqlite => write_report_sqlite(report, path),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "sqlite" => Ok(ReportFormat::Sqlite),
            _ => Err(ReportError::unknown_format(format)),
        }
    }
}

/// Create a report writer from its selector name
///
/// # Errors
///
/// Returns `UnknownFormat` naming `format` unless it is `csv`, `json` or `sqlite`.
pub fn create_writer(format: &str) -> Result<ReportFormat, ReportError> {
    format.parse()
}

fn write_file<F>(path: &Path, render: F) -> Result<(), ReportError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), ReportError>,
{
    let file = File::create(path).map_err(|e| {
        ReportError::write(format!("Failed to create file '{}': {}", path.display(), e))
    })?;

    let mut output = BufWriter::new(file);
    render(&mut output as &mut dyn Write)?;
    output
        .flush()
        .map_err(|e| ReportError::write(format!("Failed to write '{}': {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Transaction;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case::csv("csv", ReportFormat::Csv)]
    #[case::json("json", ReportFormat::Json)]
    #[case::sqlite("sqlite", ReportFormat::Sqlite)]
    fn test_create_writer(#[case] format: &str, #[case] expected: ReportFormat) {
        assert_eq!(create_writer(format).unwrap(), expected);
        assert_eq!(expected.to_string(), format);
    }

    #[test]
    fn test_name_round_trips_through_factory() {
        for format in ReportFormat::ALL {
            assert_eq!(create_writer(format.name()).unwrap(), format);
        }
    }

    #[rstest]
    #[case::garbage("aaaaaa")]
    #[case::empty("")]
    #[case::upper_case("JSON")]
    fn test_create_writer_unknown(#[case] format: &str) {
        assert_eq!(
            create_writer(format).unwrap_err(),
            ReportError::unknown_format(format)
        );
    }

    #[test]
    fn test_open_input_missing_file() {
        let err = open_input(Path::new("does/not/exist.json")).unwrap_err();
        assert_eq!(
            err,
            ReportError::FileNotFound {
                path: "does/not/exist.json".to_string()
            }
        );
    }

    #[rstest]
    #[case::csv(ReportFormat::Csv, "report.csv")]
    #[case::json(ReportFormat::Json, "report.json")]
    #[case::sqlite(ReportFormat::Sqlite, "report.sqlite")]
    fn test_write_creates_parent_directories(#[case] format: ReportFormat, #[case] file: &str) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("output").join(file);
        let mut report = Report::new();
        report.update(&Transaction::new(1, 10, "a"));

        format.write(&report, &path).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "stale content that is longer than the report").unwrap();

        ReportFormat::Json.write(&Report::new(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }
}
