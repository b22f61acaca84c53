//! SQLite output of a finished report
//!
//! Produces two tables:
//!
//! ```text
//! users_report             (id, sum)                       one row per user
//! users_categories_report  (user_id, category_name, sum)   one row per user category
//! ```
//!
//! Category names are stored without the `category_` prefix. Existing tables
//! are dropped first, and all inserts run in a single database transaction.
//!
//! The sqlx driver is async; [`write_report_sqlite`] runs it to completion on
//! a current-thread tokio runtime owned by the call.

use crate::types::{Report, ReportError, CATEGORY_PREFIX, SUM_KEY};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::path::Path;

const SCHEMA: &str = r#"
    DROP TABLE IF EXISTS users_report;

    DROP TABLE IF EXISTS users_categories_report;

    CREATE TABLE users_report (
        id INT NOT NULL,
        sum INT NOT NULL,
        PRIMARY KEY (id)
    );

    CREATE TABLE users_categories_report (
        user_id INT NOT NULL,
        category_name VARCHAR(255) NOT NULL,
        sum INT NOT NULL,
        PRIMARY KEY (user_id, category_name)
    );
"#;

const INSERT_USER: &str = "INSERT INTO users_report (id, sum) VALUES (?, ?)";

const INSERT_USER_CATEGORY: &str =
    "INSERT INTO users_categories_report (user_id, category_name, sum) VALUES (?, ?, ?)";

/// Write a report into the SQLite database at `path`
///
/// The database file is created if it does not exist.
///
/// # Errors
///
/// Returns `DatabaseError` if the runtime cannot start or any statement fails.
/// A failed write leaves previously existing tables untouched.
pub fn write_report_sqlite(report: &Report, path: &Path) -> Result<(), ReportError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ReportError::DatabaseError {
            message: format!("Failed to start database runtime: {}", e),
        })?;

    runtime.block_on(write_report(report, path))
}

async fn write_report(report: &Report, path: &Path) -> Result<(), ReportError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let mut connection = SqliteConnection::connect_with(&options).await?;

    let mut tx = connection.begin().await?;
    sqlx::raw_sql(SCHEMA).execute(&mut *tx).await?;

    for (user_id, row) in report.rows() {
        let sum = row.get(SUM_KEY).copied().unwrap_or_default();
        sqlx::query(INSERT_USER)
            .bind(user_id)
            .bind(sum)
            .execute(&mut *tx)
            .await?;

        for (key, amount) in row {
            if let Some(category) = key.strip_prefix(CATEGORY_PREFIX) {
                sqlx::query(INSERT_USER_CATEGORY)
                    .bind(user_id)
                    .bind(category)
                    .bind(*amount)
                    .execute(&mut *tx)
                    .await?;
            }
        }
    }

    tx.commit().await?;
    connection.close().await?;

    Ok(())
}
