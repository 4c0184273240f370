use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank trial suggestions for a patient
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestionsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "patient_id", rename = "patientId")]
    pub patient_id: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

/// Request to drop a patient's cached suggestions after their profile changed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InvalidateRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "patient_id", rename = "patientId")]
    pub patient_id: String,
}
