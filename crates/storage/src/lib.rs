//! PostgreSQL storage layer for lb-probe.
//!
//! A thin store over `sqlx::PgPool`: lazy pool construction, idempotent
//! schema initialization, and the handful of queries the HTTP handlers need.

mod error;
mod record;
mod store;

pub use error::StorageError;
pub use record::RequestRecord;
pub use store::PgStore;
