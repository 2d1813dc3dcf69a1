//! Error types for the orchestration layer
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Orchestrator Error Enum ==
/// Errors surfaced to callers of the orchestration layer.
///
/// Parse, validation and content-safety problems are not represented here:
/// they are recovered locally by fallback synthesis.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// Rate limiter denied admission; no remote call was made
    #[error("Rate limit exceeded, retry in {}s", wait_secs(.wait))]
    RateLimitExceeded { wait: Duration },

    /// Completion endpoint failed on every attempt
    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Referenced resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OrchestratorError {
    /// Wait time carried by a rate-limit rejection, rounded up to whole seconds.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            OrchestratorError::RateLimitExceeded { wait } => Some(wait_secs(wait)),
            _ => None,
        }
    }
}

fn wait_secs(wait: &Duration) -> u64 {
    let secs = wait.as_secs();
    if wait.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for OrchestratorError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.to_string());

        if let Some(retry_after) = self.retry_after_secs() {
            return (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after.to_string())],
                Json(body.with_retry_after(retry_after)),
            )
                .into_response();
        }

        let status = match &self {
            OrchestratorError::RemoteCall(_) => StatusCode::BAD_GATEWAY,
            OrchestratorError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            OrchestratorError::NotFound(_) => StatusCode::NOT_FOUND,
            OrchestratorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrchestratorError::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the orchestration layer.
pub type Result<T> = std::result::Result<T, OrchestratorError>;
