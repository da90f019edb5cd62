//! Async client for the Mountain Risk API.

pub mod client;

pub use client::{
    AssessRequest, AssessResponse, ErrorResponse, ReportResponse, RiskAssessment, RiskClient,
    RiskFactors, SuggestionsResponse,
};
