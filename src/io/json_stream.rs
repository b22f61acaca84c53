//! Pull-based reader over a JSON array of transactions
//!
//! Provides a streaming iterator over the elements of a top-level JSON array.
//! Only the array delimiters are handled here; each element is handed to
//! `serde_json` as a standalone value, so at most one [`Transaction`] is held
//! in memory at a time.
//!
//! # Protocol
//!
//! ```text
//! TransactionStream::open   consumes `[`
//! Iterator::next            decodes one element per call, `None` once `]` is next
//! TransactionStream::finish consumes `]`, rejects trailing content
//! ```
//!
//! # Error Handling
//!
//! - Missing or misplaced delimiters are `FormatError`s
//! - A malformed element is a `DecodeError`
//! - I/O failures of the underlying source are `ReadError`s
//!
//! After the first error the iterator is exhausted.

use crate::types::{ReportError, Transaction};
use serde::Deserialize;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Right after `[`
    First,
    /// Right after an element
    Next,
    /// `]` is next, or an error was returned
    Done,
}

/// Streaming cursor over the elements of a JSON array
///
/// # Examples
///
/// ```
/// use json_report_engine::io::TransactionStream;
///
/// let input = r#"[{"user_id": 1, "amount": 5, "category": "food"}]"#;
/// let mut stream = TransactionStream::open(input.as_bytes()).unwrap();
/// let transactions: Vec<_> = stream.by_ref().collect::<Result<_, _>>().unwrap();
/// stream.finish().unwrap();
///
/// assert_eq!(transactions.len(), 1);
/// assert_eq!(transactions[0].category, "food");
/// ```
#[derive(Debug)]
pub struct TransactionStream<R: BufRead> {
    reader: R,
    position: Position,
}

impl<R: BufRead> TransactionStream<R> {
    /// Consume the opening `[` and prepare to yield elements
    ///
    /// # Errors
    ///
    /// * `FormatError` if the first significant byte is not `[`
    /// * `ReadError` if the source fails
    pub fn open(mut reader: R) -> Result<Self, ReportError> {
        match peek_significant(&mut reader)? {
            Some(b'[') => reader.consume(1),
            found => return Err(unexpected("`[`", found)),
        }

        Ok(Self {
            reader,
            position: Position::First,
        })
    }

    /// Consume the closing `]`
    ///
    /// Anything other than whitespace after the array is rejected.
    ///
    /// # Errors
    ///
    /// * `FormatError` if `]` is missing or followed by more content
    /// * `ReadError` if the source fails
    pub fn finish(mut self) -> Result<(), ReportError> {
        match peek_significant(&mut self.reader)? {
            Some(b']') => self.reader.consume(1),
            found => return Err(unexpected("`]`", found)),
        }

        match peek_significant(&mut self.reader)? {
            None => Ok(()),
            Some(byte) => Err(ReportError::format(format!(
                "unexpected {} after the closing `]`",
                describe(Some(byte))
            ))),
        }
    }

    /// Move past the separator in front of the next element
    ///
    /// Returns `false` when the array is closed.
    fn advance(&mut self) -> Result<bool, ReportError> {
        if self.position == Position::Done {
            return Ok(false);
        }

        match (self.position, peek_significant(&mut self.reader)?) {
            (_, Some(b']')) => {
                self.position = Position::Done;
                Ok(false)
            }
            (Position::Next, Some(b',')) => {
                self.reader.consume(1);
                Ok(true)
            }
            (Position::Next, found @ Some(_)) => {
                Err(unexpected("`,` or `]` after array element", found))
            }
            (_, None) => Err(unexpected("`]`", None)),
            (_, Some(_)) => Ok(true),
        }
    }

    fn decode(&mut self) -> Result<Transaction, ReportError> {
        let mut deserializer = serde_json::Deserializer::from_reader(&mut self.reader);
        let transaction = Transaction::deserialize(&mut deserializer)?;
        self.position = Position::Next;
        Ok(transaction)
    }
}

impl<R: BufRead> Iterator for TransactionStream<R> {
    type Item = Result<Transaction, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.advance() {
            Ok(false) => return None,
            Ok(true) => self.decode(),
            Err(e) => Err(e),
        };

        if result.is_err() {
            self.position = Position::Done;
        }
        Some(result)
    }
}

/// JSON insignificant whitespace (RFC 8259)
pub(crate) fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Format a byte (or end of input) for error messages
pub(crate) fn describe(found: Option<u8>) -> String {
    match found {
        Some(byte) if byte.is_ascii_graphic() => format!("`{}`", byte as char),
        Some(byte) => format!("byte 0x{:02x}", byte),
        None => "end of input".to_string(),
    }
}

pub(crate) fn unexpected(expected: &str, found: Option<u8>) -> ReportError {
    ReportError::format(format!("expected {}, found {}", expected, describe(found)))
}

/// Skip whitespace and return the next byte without consuming it
fn peek_significant<R: BufRead>(reader: &mut R) -> Result<Option<u8>, ReportError> {
    loop {
        let buffer = reader.fill_buf()?;
        if buffer.is_empty() {
            return Ok(None);
        }

        match buffer.iter().position(|&b| !is_json_whitespace(b)) {
            Some(offset) => {
                let byte = buffer[offset];
                reader.consume(offset);
                return Ok(Some(byte));
            }
            None => {
                let skipped = buffer.len();
                reader.consume(skipped);
            }
        }
    }
}
