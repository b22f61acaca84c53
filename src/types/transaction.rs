//! Transaction record decoded from the input JSON array
//!
//! Decoding follows plain JSON-object rules: unknown fields are ignored and
//! missing fields fall back to zero or the empty string.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// User identifier
pub type UserId = i64;

/// Transaction amount in the smallest currency unit
///
/// Amounts may be negative (refunds, corrections).
pub type Amount = i64;

/// One element of the input array
///
/// Only JSON objects decode into a transaction. A repeated key keeps its last
/// value, and a `null` value leaves the field at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    /// The user this transaction belongs to
    pub user_id: UserId,

    /// Signed amount added to the user's totals
    pub amount: Amount,

    /// Spending category
    ///
    /// Absent and `null` both decode to the empty string.
    pub category: String,
}

impl Transaction {
    pub fn new(user_id: UserId, amount: Amount, category: impl Into<String>) -> Self {
        Self {
            user_id,
            amount,
            category: category.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum Field {
    UserId,
    Amount,
    Category,
    #[serde(other)]
    Unknown,
}

struct TransactionVisitor;

impl<'de> Visitor<'de> for TransactionVisitor {
    type Value = Transaction;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a transaction object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Transaction, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut transaction = Transaction::default();

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::UserId => {
                    if let Some(user_id) = map.next_value::<Option<UserId>>()? {
                        transaction.user_id = user_id;
                    }
                }
                Field::Amount => {
                    if let Some(amount) = map.next_value::<Option<Amount>>()? {
                        transaction.amount = amount;
                    }
                }
                Field::Category => {
                    transaction.category = map.next_value::<Option<String>>()?.unwrap_or_default();
                }
                Field::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(transaction)
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TransactionVisitor)
    }
}
