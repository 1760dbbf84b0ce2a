//! HTTP routes for the host bridge.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{health_check, post_message, previewed_content};
use crate::host::HostHandle;

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Channel to the host worker.
    pub host: HostHandle,
    /// Whether the host has a workspace open.
    pub has_workspace: bool,
}

/// Builds the router with all endpoints mounted.
pub fn routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/messages", post(post_message))
        .route("/api/v1/preview/{*path}", get(previewed_content))
        .with_state(state)
}
