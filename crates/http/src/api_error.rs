//! JSON error responses for the HTTP handlers.
//!
//! Every database failure is caught at the handler boundary and converted
//! to a 500 with a fixed JSON body; none propagate to crash the process.
//! The underlying error is logged where it occurs, not exposed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Handler-boundary error, one variant per endpoint failure body.
#[derive(Debug)]
pub enum ApiError {
    /// `GET /` could not reach the database.
    DatabaseUnavailable { server_id: String },
    /// `POST /requests` failed to persist the row.
    InsertFailed,
    /// `GET /requests` failed to read rows.
    FetchFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::DatabaseUnavailable { server_id } => {
                serde_json::json!({"error": "Database connection failed", "server_id": server_id})
            },
            Self::InsertFailed => serde_json::json!({"error": "Failed to insert request"}),
            Self::FetchFailed => serde_json::json!({"error": "Failed to fetch requests"}),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
