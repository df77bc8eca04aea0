//! HTTP API surface for lb-probe.

mod api_error;
mod handlers;
mod response_types;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use lb_probe_storage::PgStore;

pub use api_error::ApiError;
pub use response_types::{HealthResponse, InsertResponse, RequestList, RootInfo};

/// Shared application state handed to every handler.
///
/// Constructed once at startup and injected via `Router::with_state`;
/// nothing here is ambient global state.
pub struct AppState {
    /// Pooled database store.
    pub store: PgStore,
    /// Identifier of this instance, reported in every response.
    pub server_id: String,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::root_info))
        .route("/requests", get(handlers::list_requests).post(handlers::create_request))
        .with_state(state)
}
