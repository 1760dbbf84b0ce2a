//! Request/Response types for the HTTP bridge.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Whether a workspace is open.
    pub workspace: bool,
    /// Timestamp of the check.
    pub timestamp: DateTime<Utc>,
}
