//! API handler implementations.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

use crate::api::routes::ApiState;
use crate::api::types::HealthResponse;
use crate::host::{ChannelError, HostRequest, HostResponse};

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The host worker is unavailable.
    #[error("Host unavailable: {0}")]
    Host(#[from] ChannelError),
    /// Nothing was previewed for the requested path.
    #[error("No previewed content for {0}")]
    NotPreviewed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Host(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotPreviewed(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// GET /health
pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        workspace: state.has_workspace,
        timestamp: Utc::now(),
    })
}

/// POST /api/v1/messages
///
/// Forwards one front-end message to the host and returns its response.
/// Failures inside the host come back as `notify` messages with status 200.
pub async fn post_message(
    State(state): State<ApiState>,
    Json(request): Json<HostRequest>,
) -> Result<Json<HostResponse>, ApiError> {
    let response = state.host.request(request).await?;
    Ok(Json(response))
}

/// GET /api/v1/preview/{*path}
///
/// Proposed content of a file from the last preview, as plain text.
pub async fn previewed_content(
    State(state): State<ApiState>,
    Path(path): Path<String>,
) -> Result<String, ApiError> {
    state
        .host
        .previewed_content(&path)
        .ok_or(ApiError::NotPreviewed(path))
}
