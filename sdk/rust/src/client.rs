use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AssessRequest {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub temperature: i32,
    pub precipitation: i32,
    pub wind_speed: i32,
    pub slope_angle: i32,
    pub elevation: i32,
    pub activity: String, // "None Recent", "Low", "Moderate" or "High"
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: u8,
    pub factors: RiskFactors,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssessResponse {
    pub success: bool,
    pub data: RiskAssessment,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub success: bool,
    pub message: String,
    pub download_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsResponse {
    pub success: bool,
    pub suggestions: Vec<String>,
}

/// The `{success: false, error}` body returned with a 500.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

pub struct RiskClient {
    client: Client,
    base_url: String,
}

impl RiskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Use a preconfigured HTTP client (timeouts, proxy settings).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Assess the risk of a location.
    pub async fn assess_risk(&self, req: &AssessRequest) -> Result<AssessResponse, Box<dyn std::error::Error>> {
        let resp = self.client
            .post(format!("{}/api/assess-risk", self.base_url))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }

    /// Generate a report URL for a previously assessed location.
    pub async fn generate_report(
        &self,
        location: &str,
        risk_data: &RiskAssessment,
    ) -> Result<ReportResponse, Box<dyn std::error::Error>> {
        let resp = self.client
            .post(format!("{}/api/generate-report", self.base_url))
            .json(&serde_json::json!({ "location": location, "riskData": risk_data }))
            .send()
            .await?;
        decode(resp).await
    }

    /// Autocomplete a partial location name.
    pub async fn location_suggestions(&self, query: &str) -> Result<SuggestionsResponse, Box<dyn std::error::Error>> {
        let resp = self.client
            .get(format!("{}/api/location-suggestions", self.base_url))
            .query(&[("query", query)])
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Box<dyn std::error::Error>> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|e| e.error)
            .unwrap_or(text);
        return Err(format!("API returned error status {}: {}", status, message).into());
    }

    Ok(serde_json::from_str(&text)?)
}
