//! JSON response envelopes.
//!
//! Successful responses are `{"success": true, ...payload}`; failures are
//! `{"success": false, "error": "..."}` with HTTP 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::assessment::RiskProfile;

/// `{"success": true}` merged with the fields of `payload`.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

impl<T: Serialize> IntoResponse for SuccessEnvelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct FailureEnvelope {
    pub success: bool,
    pub error: String,
}

impl FailureEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl IntoResponse for FailureEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// Payload of a risk assessment.
#[derive(Debug, Serialize)]
pub struct RiskData {
    pub data: RiskProfile,
}

/// Payload of a suggestion lookup.
#[derive(Debug, Serialize)]
pub struct Suggestions {
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}
