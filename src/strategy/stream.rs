//! Streaming report generation
//!
//! Decodes the input one array element at a time through a
//! [`TransactionStream`] and folds each transaction into the report as soon as
//! it is decoded.
//!
//! # Memory
//!
//! O(1) in the number of elements: only the current transaction, the read
//! buffer and the growing report are held. Intended for inputs too large to
//! buffer.
//!
//! On any error the partially built report is dropped.

use crate::io::json_stream::TransactionStream;
use crate::types::{Report, ReportError};
use std::io::{BufReader, Read};

/// Read buffer for the incremental decoder
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Build a report by decoding the source incrementally
///
/// # Errors
///
/// * `FormatError` if the source is not a `[`...`]` array
/// * `DecodeError` if an element is malformed
/// * `ReadError` if the source fails
pub fn generate<R: Read>(source: R) -> Result<Report, ReportError> {
    let reader = BufReader::with_capacity(BUFFER_CAPACITY, source);
    let mut stream = TransactionStream::open(reader)?;
    let mut report = Report::new();

    for transaction in stream.by_ref() {
        report.update(&transaction?);
    }
    stream.finish()?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_stream_groups_multiple_users() {
        let input = r#"[
            {"user_id": 10, "amount": 10, "category": "aa"},
            {"user_id": 10, "amount": 20, "category": "aa"},
            {"user_id": 11, "amount": 30, "category": "bb"},
            {"user_id": 11, "amount": 40, "category": "bb"}
        ]"#;

        let report = generate(input.as_bytes()).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report.get(10).unwrap()["sum"], 30);
        assert_eq!(report.get(11).unwrap()["sum"], 70);
    }

    #[test]
    fn test_stream_missing_category() {
        let input = r#"[{"user_id": 4, "amount": 9}, {"user_id": 4, "amount": 1, "category": null}]"#;

        let report = generate(input.as_bytes()).unwrap();

        assert_eq!(report.get(4).unwrap()["category_"], 10);
    }

    #[rstest]
    #[case::object(r#"{"user_id": 1}"#)]
    #[case::missing_close(r#"[{"user_id": 1}"#)]
    #[case::bad_element(r#"[{"user_id": 1}, {"amount": []}]"#)]
    fn test_stream_discards_partial_report(#[case] input: &str) {
        assert!(generate(input.as_bytes()).is_err());
    }
}
