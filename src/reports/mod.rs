//! Report generation.
//!
//! No document is rendered. A report is a download URL derived from the
//! request time and the location name.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

pub const REPORT_GENERATED_MESSAGE: &str = "Report generated successfully";

/// Body of `POST /api/generate-report`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub location: String,
    /// Assessment previously returned to the caller. Accepted but unused.
    #[serde(default)]
    pub risk_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub message: String,
    pub download_url: String,
}

/// Whitespace as matched by `\s` in an ECMAScript regex: Unicode White_Space
/// minus U+0085, plus U+FEFF.
fn is_location_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Replace every run of whitespace with a single underscore.
pub fn sanitize_location(location: &str) -> String {
    let mut out = String::with_capacity(location.len());
    let mut in_whitespace = false;
    for c in location.chars() {
        if is_location_whitespace(c) {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

pub fn download_url(base_path: &str, timestamp_ms: u128, location: &str) -> String {
    format!(
        "{}/{}_{}.pdf",
        base_path.trim_end_matches('/'),
        timestamp_ms,
        sanitize_location(location)
    )
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Generate a report for `request` stamped at `timestamp_ms`.
pub fn generate(request: &ReportRequest, base_path: &str, timestamp_ms: u128) -> GeneratedReport {
    GeneratedReport {
        message: REPORT_GENERATED_MESSAGE.to_string(),
        download_url: download_url(base_path, timestamp_ms, &request.location),
    }
}
