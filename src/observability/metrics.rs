//! Metrics collection and exposition.
//!
//! # Metrics
//! - `risk_http_requests_total` (counter): requests by method, path, status
//! - `risk_http_request_duration_seconds` (histogram): latency by method, path
//! - `risk_assessments_total` (counter): assessments by profile source
//! - `risk_reports_generated_total` (counter): generated report URLs
//!
//! Without an installed recorder every call is a no-op, so handlers record
//! unconditionally.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let duration = start.elapsed().as_secs_f64();

    metrics::counter!(
        "risk_http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "risk_http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration);
}

pub fn record_assessment(profile: &'static str) {
    metrics::counter!("risk_assessments_total", "profile" => profile).increment(1);
}

pub fn record_report() {
    metrics::counter!("risk_reports_generated_total").increment(1);
}

/// Middleware recording request count and latency, labelled with the
/// matched route template (or `static` for fallback file serving).
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "static".to_owned());

    let response = next.run(request).await;
    record_request(&method, &path, response.status().as_u16(), start);
    response
}
