//! Per-user aggregate built from a stream of transactions
//!
//! A [`Report`] maps each user id to one [`ReportRow`]. Rows grow lazily: the
//! `category_<name>` keys appear the first time a category is seen for that
//! user and are never removed.

use crate::types::transaction::{Amount, Transaction, UserId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Key echoing the owning user id
pub const USER_ID_KEY: &str = "user_id";

/// Key holding the running total of all amounts
pub const SUM_KEY: &str = "sum";

/// Prefix of the per-category running totals
pub const CATEGORY_PREFIX: &str = "category_";

/// Aggregate fields of a single user
///
/// Keys are kept ordered so a row serializes the same way every time.
pub type ReportRow = BTreeMap<String, Amount>;

/// Aggregation result, one row per user
///
/// The map is unordered; use [`Report::rows`] for a stable iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: HashMap<UserId, ReportRow>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one transaction into the report
    ///
    /// Creates the user's row on first sight, echoes the user id, and adds the
    /// amount to both `sum` and `category_<category>`. Addition wraps on
    /// overflow, so this never fails.
    pub fn update(&mut self, transaction: &Transaction) {
        let row = self.rows.entry(transaction.user_id).or_default();

        row.insert(USER_ID_KEY.to_string(), transaction.user_id);
        add_to(row, SUM_KEY.to_string(), transaction.amount);
        add_to(
            row,
            format!("{CATEGORY_PREFIX}{}", transaction.category),
            transaction.amount,
        );
    }

    /// Row for a user, if that user was ever updated
    pub fn get(&self, user_id: UserId) -> Option<&ReportRow> {
        self.rows.get(&user_id)
    }

    /// Number of distinct users
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows sorted by user id
    pub fn rows(&self) -> Vec<(UserId, &ReportRow)> {
        let mut rows: Vec<(UserId, &ReportRow)> =
            self.rows.iter().map(|(&id, row)| (id, row)).collect();
        rows.sort_by_key(|(id, _)| *id);
        rows
    }

    /// Union of the keys of every row
    ///
    /// Ordered `user_id`, `sum`, then the category keys alphabetically, which is
    /// the column order of the CSV output.
    pub fn columns(&self) -> Vec<String> {
        let keys: BTreeSet<&str> = self
            .rows
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();

        let mut columns = Vec::with_capacity(keys.len());
        for fixed in [USER_ID_KEY, SUM_KEY] {
            if keys.contains(fixed) {
                columns.push(fixed.to_string());
            }
        }
        columns.extend(
            keys.into_iter()
                .filter(|key| *key != USER_ID_KEY && *key != SUM_KEY)
                .map(str::to_string),
        );
        columns
    }
}

impl<'a> Extend<&'a Transaction> for Report {
    fn extend<I: IntoIterator<Item = &'a Transaction>>(&mut self, iter: I) {
        for transaction in iter {
            self.update(transaction);
        }
    }
}

fn add_to(row: &mut ReportRow, key: String, amount: Amount) {
    let slot = row.entry(key).or_insert(0);
    *slot = slot.wrapping_add(amount);
}
