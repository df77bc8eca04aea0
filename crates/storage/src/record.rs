//! The one persisted entity: a request row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::error::StorageError;

/// One row of the `requests` table.
///
/// `id` is assigned by the database (SERIAL) and never reused;
/// `timestamp` defaults to insertion time. Rows are insert-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: i32,
    pub server_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

pub(crate) fn row_to_request(row: &PgRow) -> Result<RequestRecord, StorageError> {
    Ok(RequestRecord {
        id: row.try_get("id")?,
        server_id: row.try_get("server_id")?,
        timestamp: row.try_get("timestamp")?,
        // data is a nullable JSONB column; NULL surfaces as JSON null
        data: row.try_get::<Option<serde_json::Value>, _>("data")?.unwrap_or(serde_json::Value::Null),
    })
}
