//! Bulk (naive) report generation
//!
//! Reads the whole source into memory, decodes it as one JSON array and folds
//! every element into a fresh [`Report`] in array order.
//!
//! # Memory
//!
//! O(input size): the raw bytes and the decoded `Vec<Transaction>` are both
//! alive while folding. Simple, and fast for small to moderate inputs.

use crate::io::json_stream::{is_json_whitespace, unexpected};
use crate::types::{Report, ReportError, Transaction};
use std::io::Read;

/// Build a report by buffering and decoding the entire source
///
/// # Errors
///
/// * `ReadError` if the source cannot be fully read
/// * `FormatError` if the content does not start with `[`
/// * `DecodeError` if the array or one of its elements is malformed
pub fn generate<R: Read>(mut source: R) -> Result<Report, ReportError> {
    let mut buffer = Vec::new();
    source.read_to_end(&mut buffer)?;

    expect_array(&buffer)?;
    let transactions: Vec<Transaction> = serde_json::from_slice(&buffer)?;

    let mut report = Report::new();
    report.extend(&transactions);
    Ok(report)
}

/// Check that the first significant byte opens an array
fn expect_array(buffer: &[u8]) -> Result<(), ReportError> {
    match buffer.iter().copied().find(|&b| !is_json_whitespace(b)) {
        Some(b'[') => Ok(()),
        found => Err(unexpected("`[`", found)),
    }
}
