//! Typed error enum for the storage layer.
//!
//! Lets callers match on the one failure mode with dedicated policy
//! (missing table) instead of string-matching an opaque driver error.

use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The `requests` table has not been created yet (SQLSTATE 42P01).
    /// The request counter maps this to a zero count.
    #[error("relation not found: {0}")]
    UndefinedTable(String),

    /// Connection, pool, or query failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StorageError {
    /// Whether this error means the table does not exist yet.
    pub fn is_undefined_table(&self) -> bool {
        matches!(self, Self::UndefinedTable(_))
    }
}

/// Custom `From<sqlx::Error>` — NOT blanket `#[from]`.
///
/// SQLSTATE 42P01 (undefined_table) gets its own variant; everything
/// else is a generic database failure.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "42P01") => {
                Self::UndefinedTable(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
