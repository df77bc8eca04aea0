//! PostgreSQL store built on `sqlx::PgPool`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use lb_probe_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::record::{row_to_request, RequestRecord};

/// Idempotent by construction; concurrent startup of several instances
/// must not error.
const CREATE_REQUESTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS requests (
    id SERIAL PRIMARY KEY,
    server_id VARCHAR(50),
    timestamp TIMESTAMPTZ DEFAULT NOW(),
    data JSONB
)";

const REQUEST_COLUMNS: &str = "id, server_id, timestamp, data";

/// Pooled PostgreSQL store shared by all handlers.
///
/// The pool is the only shared mutable resource in the service. It hands
/// out connections per query and returns them when the query future
/// completes or is dropped, so cancelled requests cannot leak one.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Build the pool without connecting.
    ///
    /// Connections are opened on first use, so an unreachable database
    /// surfaces per-request (HTTP 500) rather than killing startup.
    pub fn connect(config: &Config) -> Result<Self, StorageError> {
        let mut options = PgPoolOptions::new().max_connections(config.pool_size);
        if let Some(secs) = config.acquire_timeout_secs {
            options = options.acquire_timeout(Duration::from_secs(secs));
        }
        let pool = options.connect_lazy(&config.connection_string())?;
        Ok(Self { pool })
    }

    /// Create the `requests` table if it does not exist yet.
    ///
    /// Callers on the startup path log failures and carry on; the service
    /// stays up even when initialization fails.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_REQUESTS_TABLE).execute(&self.pool).await?;
        tracing::info!("requests table ready");
        Ok(())
    }

    /// Total number of persisted request rows.
    ///
    /// A missing table is reported as zero, not an error, so the root-info
    /// handler cannot fail just because initialization has not run yet.
    /// Other failures still propagate.
    pub async fn count_requests(&self) -> Result<i64, StorageError> {
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM requests")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from);
        match result {
            Ok(count) => Ok(count),
            Err(err) if err.is_undefined_table() => {
                tracing::debug!("requests table missing, reporting zero");
                Ok(0)
            },
            Err(err) => Err(err),
        }
    }

    /// Insert one row stamped with this instance's identifier and the
    /// database's current time, returning the row as persisted.
    pub async fn insert_request(
        &self,
        server_id: &str,
        data: &serde_json::Value,
    ) -> Result<RequestRecord, StorageError> {
        let row = sqlx::query(
            "INSERT INTO requests (server_id, timestamp, data) VALUES ($1, NOW(), $2)
             RETURNING id, server_id, timestamp, data",
        )
        .bind(server_id)
        .bind(data)
        .fetch_one(&self.pool)
        .await?;
        row_to_request(&row)
    }

    /// Most recent rows, newest first, at most `limit`.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<RequestRecord>, StorageError> {
        let sql =
            format!("SELECT {REQUEST_COLUMNS} FROM requests ORDER BY timestamp DESC LIMIT $1");
        let rows = sqlx::query(&sql).bind(limit).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_request).collect()
    }

    /// Current time and version string as reported by the database.
    pub async fn server_time_and_version(&self) -> Result<(DateTime<Utc>, String), StorageError> {
        let row = sqlx::query("SELECT NOW() AS current_time, version() AS db_version")
            .fetch_one(&self.pool)
            .await?;
        Ok((row.try_get("current_time")?, row.try_get("db_version")?))
    }

    /// Close every pooled connection; further acquires are rejected.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
