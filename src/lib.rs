//! JSON Report Engine Library
//! # Overview
//!
//! This library aggregates a JSON array of financial transactions into a
//! per-user report, using either a bulk or a streaming decoding strategy, and
//! writes the report as CSV, JSON or SQLite.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Report, errors)
//! - [`strategy`] - Report generation strategies and their factory:
//!   - [`strategy::bulk`] - Load the whole input, then decode
//!   - [`strategy::stream`] - Decode and aggregate one element at a time
//! - [`io`] - JSON array cursor and the three report writers
//! - [`cli`] - CLI arguments parsing, logging and the end-to-end run
//!
//! # Report Rows
//!
//! Each user's row holds:
//! - `user_id`: the user's id
//! - `sum`: total of all the user's amounts
//! - `category_<name>`: total of the user's amounts in that category
//!   (`category_` for transactions without a category)

// Module declarations
pub mod cli;
pub mod io;
pub mod strategy;
pub mod types;

pub use io::{create_writer, ReportFormat};
pub use strategy::{create_generator, Generator};
pub use types::{Report, ReportError, ReportRow, Transaction, UserId};
