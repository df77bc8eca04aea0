//! Shared constants for lb-probe.
//!
//! Centralizes the fallback values documented in the configuration table
//! so they are not duplicated across crates.

/// Database host when `DB_HOST` is unset.
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Database port when `DB_PORT` is unset.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Database user when `DB_USER` is unset.
pub const DEFAULT_DB_USER: &str = "postgres";

/// Database password when `DB_PASSWORD` is unset.
pub const DEFAULT_DB_PASSWORD: &str = "postgres";

/// Database name when `DB_NAME` is unset.
pub const DEFAULT_DB_NAME: &str = "postgres";

/// HTTP listen port when `PORT` is unset.
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Instance identifier when `SERVER_ID` is unset.
pub const DEFAULT_SERVER_ID: &str = "server-1";

/// Connection pool size when `DB_POOL_SIZE` is unset.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Upper bound on rows returned by `GET /requests`.
pub const RECENT_REQUESTS_LIMIT: i64 = 50;
