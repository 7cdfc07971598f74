use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for the screening endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResponse {
    #[serde(rename = "screeningId")]
    pub screening_id: String,
    pub prediction: u8,
    pub probability: Option<f64>,
    #[serde(rename = "aqScore")]
    pub aq_score: u8,
    #[serde(rename = "maxScore")]
    pub max_score: u8,
    pub summary: String,
    #[serde(rename = "probabilityText")]
    pub probability_text: Option<String>,
    pub disclaimer: String,
}

/// Response for the encode-only endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedRowResponse {
    pub variant: String,
    /// Field names in classifier order
    pub fields: Vec<String>,
    pub values: Vec<f64>,
    /// Same row keyed by field name
    pub features: BTreeMap<String, f64>,
    #[serde(rename = "aqScore")]
    pub aq_score: u8,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub variant: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
