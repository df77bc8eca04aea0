//! Typed response bodies for the four endpoints.

use chrono::{DateTime, Utc};
use lb_probe_storage::RequestRecord;
use serde::Serialize;

/// `GET /health` body. Static liveness info, no database involved.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server: String,
    pub timestamp: DateTime<Utc>,
}

/// `GET /` body.
#[derive(Debug, Serialize)]
pub struct RootInfo {
    pub message: &'static str,
    pub server_id: String,
    pub database_time: DateTime<Utc>,
    pub database_version: String,
    pub request_count: i64,
}

/// `POST /requests` body, echoing the row as persisted.
#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub success: bool,
    pub request: RequestRecord,
}

/// `GET /requests` body. `total_count` is the number of returned rows.
#[derive(Debug, Serialize)]
pub struct RequestList {
    pub requests: Vec<RequestRecord>,
    pub total_count: usize,
    pub server_id: String,
}
