//! API handlers.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};

use crate::assessment::{self, AssessmentRequest};
use crate::http::error::{ApiError, HandlerError};
use crate::http::response::{HealthStatus, RiskData, SuccessEnvelope, Suggestions};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::reports::{self, GeneratedReport, ReportRequest};
use crate::suggestions::{self, SuggestionQuery};

/// `POST /api/assess-risk`
pub async fn assess_risk(
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<SuccessEnvelope<RiskData>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Assessment(e.into()))?;

    // Coordinates are logged, not used.
    tracing::debug!(
        location = %request.location,
        lat = ?request.lat,
        lng = ?request.lng,
        "Assessing risk"
    );

    let (source, profile) = assessment::assess(&request.location);
    metrics::record_assessment(source.label());

    tracing::info!(
        location = %request.location,
        profile = source.label(),
        risk_level = profile.risk_level,
        "Risk assessed"
    );

    Ok(SuccessEnvelope::new(RiskData { data: profile }))
}

/// `POST /api/generate-report`
pub async fn generate_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<SuccessEnvelope<GeneratedReport>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Report(e.into()))?;

    let report = reports::generate(
        &request,
        &state.config.reports.base_path,
        reports::now_millis(),
    );
    metrics::record_report();

    tracing::info!(
        location = %request.location,
        download_url = %report.download_url,
        "Report generated"
    );

    Ok(SuccessEnvelope::new(report))
}

/// `GET /api/location-suggestions?query=`
pub async fn location_suggestions(
    params: Result<Query<SuggestionQuery>, QueryRejection>,
) -> Result<SuccessEnvelope<Suggestions>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Suggestions(e.into()))?;
    let query = params
        .query
        .ok_or(ApiError::Suggestions(HandlerError::MissingParameter("query")))?;

    let suggestions = suggestions::suggest(&query);
    tracing::debug!(query = %query, matches = suggestions.len(), "Suggestions served");

    Ok(SuccessEnvelope::new(Suggestions { suggestions }))
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
