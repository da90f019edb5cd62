//! Handler failures and their JSON rendering.
//!
//! Every failure surfaces to the client the same way: HTTP 500 and
//! `{"success": false, "error": "<endpoint message>"}`. The underlying cause
//! is logged, never returned.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::response::FailureEnvelope;

/// Why a handler could not produce a result.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] JsonRejection),
    #[error("invalid query string: {0}")]
    Query(#[from] QueryRejection),
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
}

/// A failed API call, tagged with the endpoint it belongs to.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to assess risk")]
    Assessment(#[source] HandlerError),
    #[error("Failed to generate report")]
    Report(#[source] HandlerError),
    #[error("Failed to get suggestions")]
    Suggestions(#[source] HandlerError),
}

impl ApiError {
    pub fn cause(&self) -> &HandlerError {
        match self {
            ApiError::Assessment(e) | ApiError::Report(e) | ApiError::Suggestions(e) => e,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, cause = %self.cause(), "Request failed");
        FailureEnvelope::new(self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_error_renders_failure_envelope() {
        let response = ApiError::Suggestions(HandlerError::MissingParameter("query")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Failed to get suggestions"})
        );
    }

    #[test]
    fn test_cause_is_kept() {
        let err = ApiError::Report(HandlerError::MissingParameter("location"));
        assert_eq!(err.to_string(), "Failed to generate report");
        assert_eq!(err.cause().to_string(), "missing required parameter `location`");
    }
}
