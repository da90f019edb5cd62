//! Risk assessment types.

use serde::{Deserialize, Serialize};

/// Recent avalanche/landslide activity observed at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "None Recent")]
    NoneRecent,
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Every level, in ascending order.
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::NoneRecent,
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];

    /// Label as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::NoneRecent => "None Recent",
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

/// Environmental factors contributing to a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    /// Air temperature in °C.
    pub temperature: i32,
    /// Precipitation in mm.
    pub precipitation: i32,
    /// Wind speed in km/h.
    pub wind_speed: i32,
    /// Slope angle in degrees.
    pub slope_angle: i32,
    /// Elevation in metres.
    pub elevation: i32,
    pub activity: ActivityLevel,
}

/// A risk profile: score, contributing factors and advice.
///
/// Recommendations are always compile-time literals, so the whole profile
/// can live in a `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    /// Overall risk, 0 (safe) to 100.
    pub risk_level: u8,
    pub factors: RiskFactors,
    pub recommendations: &'static [&'static str],
}

/// Body of `POST /api/assess-risk`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    pub location: String,
    /// Coordinates are passed through untyped; any JSON value is accepted.
    #[serde(default)]
    pub lat: Option<serde_json::Value>,
    #[serde(default)]
    pub lng: Option<serde_json::Value>,
}

/// Where an assessment result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    /// A fixed profile, by canonical name.
    Known(&'static str),
    /// Freshly generated for this request.
    Generated,
}

impl ProfileSource {
    /// Metrics/log label.
    pub fn label(&self) -> &'static str {
        match *self {
            ProfileSource::Known(name) => name,
            ProfileSource::Generated => "generated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_serializes_as_label() {
        for level in ActivityLevel::ALL {
            let json = serde_json::to_value(level).unwrap();
            assert_eq!(json, serde_json::Value::String(level.as_str().to_string()));
        }
    }

    #[test]
    fn test_profile_uses_camel_case_fields() {
        let profile = RiskProfile {
            risk_level: 10,
            factors: RiskFactors {
                temperature: 0,
                precipitation: 1,
                wind_speed: 2,
                slope_angle: 3,
                elevation: 4,
                activity: ActivityLevel::High,
            },
            recommendations: &["stay home"],
        };
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["riskLevel"], 10);
        assert_eq!(json["factors"]["windSpeed"], 2);
        assert_eq!(json["factors"]["slopeAngle"], 3);
        assert_eq!(json["factors"]["activity"], "High");
        assert_eq!(json["recommendations"][0], "stay home");
    }

    #[test]
    fn test_request_coordinates_optional() {
        let req: AssessmentRequest = serde_json::from_str(r#"{"location":"Andes"}"#).unwrap();
        assert_eq!(req.location, "Andes");
        assert!(req.lat.is_none() && req.lng.is_none());

        let missing = serde_json::from_str::<AssessmentRequest>(r#"{"lat": 1.0}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_request_coordinates_not_validated() {
        let req: AssessmentRequest =
            serde_json::from_str(r#"{"location":"Alps","lat":"46.0","lng":{"x":1}}"#).unwrap();
        assert_eq!(req.lat, Some(serde_json::json!("46.0")));
        assert_eq!(req.lng, Some(serde_json::json!({"x": 1})));
    }
}
