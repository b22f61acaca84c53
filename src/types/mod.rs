//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: the decoded input record and its identifiers
//! - `report`: the per-user accumulator
//! - `error`: Error types for the report engine

pub mod error;
pub mod report;
pub mod transaction;

pub use error::ReportError;
pub use report::{Report, ReportRow, CATEGORY_PREFIX, SUM_KEY, USER_ID_KEY};
pub use transaction::{Amount, Transaction, UserId};
