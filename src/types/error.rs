//! Error types for the report engine
//!
//! Every error is terminal for the call that raised it: nothing is retried and
//! no partial report is ever returned alongside an error.
//!
//! # Error Categories
//!
//! - **Input Errors**: missing file, unreadable source
//! - **JSON Errors**: top-level shape wrong (format) or an element malformed (decode)
//! - **Selection Errors**: unknown generation algorithm or output format
//! - **Output Errors**: CSV/JSON write failures, SQLite failures

use thiserror::Error;

/// Main error type for the report engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// The byte source could not be fully consumed
    #[error("Read error: {message}")]
    ReadError {
        /// Description of the I/O failure
        message: String,
    },

    /// The input is not a JSON array, or its delimiters are missing or misplaced
    #[error("Format error: {message}")]
    FormatError {
        /// What was expected and what was found
        message: String,
    },

    /// An array element is not a well-formed transaction object
    #[error("Decode error{}: {message}", line.map(|l| format!(" at line {}, column {}", l, column.unwrap_or_default())).unwrap_or_default())]
    DecodeError {
        /// Line of the offending input (if available)
        line: Option<usize>,
        /// Column of the offending input (if available)
        column: Option<usize>,
        /// Description of the decoding failure
        message: String,
    },

    /// The generator factory was given a name it does not know
    #[error("Unknown algorithm: {name}")]
    UnknownStrategy {
        /// The unrecognized selector
        name: String,
    },

    /// The writer factory was given a name it does not know
    #[error("Unknown format: {name}")]
    UnknownFormat {
        /// The unrecognized selector
        name: String,
    },

    /// The report could not be written
    #[error("Write error: {message}")]
    WriteError {
        /// Description of the write failure
        message: String,
    },

    /// The SQLite output could not be produced
    #[error("Database error: {message}")]
    DatabaseError {
        /// Description of the database failure
        message: String,
    },

    /// Command-line arguments were syntactically valid but unusable
    #[error("Invalid arguments: {message}")]
    InvalidArguments {
        /// Which argument was rejected
        message: String,
    },
}

// Conversion from io::Error to ReportError
impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::ReadError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to ReportError
//
// I/O failures surfacing through the decoder stay read errors; everything else
// is a decode error with its position.
impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return ReportError::ReadError {
                message: error.to_string(),
            };
        }

        ReportError::DecodeError {
            line: Some(error.line()).filter(|&l| l > 0),
            column: Some(error.column()).filter(|&c| c > 0),
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ReportError
impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::WriteError {
            message: error.to_string(),
        }
    }
}

// Conversion from sqlx::Error to ReportError
impl From<sqlx::Error> for ReportError {
    fn from(error: sqlx::Error) -> Self {
        ReportError::DatabaseError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create a FormatError
    pub fn format(message: impl Into<String>) -> Self {
        ReportError::FormatError {
            message: message.into(),
        }
    }

    /// Create an UnknownStrategy error
    pub fn unknown_strategy(name: &str) -> Self {
        ReportError::UnknownStrategy {
            name: name.to_string(),
        }
    }

    /// Create an UnknownFormat error
    pub fn unknown_format(name: &str) -> Self {
        ReportError::UnknownFormat {
            name: name.to_string(),
        }
    }

    /// Create a WriteError
    pub fn write(message: impl Into<String>) -> Self {
        ReportError::WriteError {
            message: message.into(),
        }
    }

    /// Create an InvalidArguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        ReportError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Whether this error was raised while ingesting the input JSON
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReportError::ReadError { .. }
                | ReportError::FormatError { .. }
                | ReportError::DecodeError { .. }
        )
    }
}
