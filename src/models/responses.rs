use crate::models::domain::TrialSuggestion;
use serde::{Deserialize, Serialize};

/// Response for the suggestions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(rename = "patientId")]
    pub patient_id: String,
    pub suggestions: Vec<TrialSuggestion>,
    /// Number of recruiting trials examined before filtering
    #[serde(rename = "totalTrials")]
    pub total_trials: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for the cache invalidation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidateResponse {
    pub success: bool,
}
