//! The four route handlers.
//!
//! Each database-touching handler maps storage failures to the fixed
//! error body for its endpoint; connections go back to the pool when the
//! query future resolves or is dropped, so error paths cannot leak one.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use lb_probe_core::RECENT_REQUESTS_LIMIT;

use crate::api_error::ApiError;
use crate::response_types::{HealthResponse, InsertResponse, RequestList, RootInfo};
use crate::AppState;

/// Liveness probe for the load balancer. Never fails.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        server: state.server_id.clone(),
        timestamp: Utc::now(),
    })
}

/// Instance info plus a database round-trip, so a balancer test can see
/// which instance answered and that its database path works.
pub async fn root_info(State(state): State<Arc<AppState>>) -> Result<Json<RootInfo>, ApiError> {
    let (database_time, database_version) =
        state.store.server_time_and_version().await.map_err(|e| {
            tracing::error!(error = %e, "root info query failed");
            ApiError::DatabaseUnavailable { server_id: state.server_id.clone() }
        })?;
    let request_count = state.store.count_requests().await.map_err(|e| {
        tracing::error!(error = %e, "request count query failed");
        ApiError::DatabaseUnavailable { server_id: state.server_id.clone() }
    })?;
    Ok(Json(RootInfo {
        message: "Hello from EC2 Load Balancer Test!",
        server_id: state.server_id.clone(),
        database_time,
        database_version,
        request_count,
    }))
}

/// Persist the request body as-is, stamped with this instance's id.
pub async fn create_request(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<InsertResponse>, ApiError> {
    let request = state.store.insert_request(&state.server_id, &body).await.map_err(|e| {
        tracing::error!(error = %e, "insert failed");
        ApiError::InsertFailed
    })?;
    tracing::debug!(id = request.id, "request row inserted");
    Ok(Json(InsertResponse { success: true, request }))
}

/// The 50 most recent rows, newest first.
pub async fn list_requests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RequestList>, ApiError> {
    let requests = state.store.list_recent(RECENT_REQUESTS_LIMIT).await.map_err(|e| {
        tracing::error!(error = %e, "select failed");
        ApiError::FetchFailed
    })?;
    tracing::debug!(count = requests.len(), "fetched recent requests");
    Ok(Json(RequestList {
        total_count: requests.len(),
        requests,
        server_id: state.server_id.clone(),
    }))
}
