use serde::{Deserialize, Serialize};

/// Patient profile as produced by the intake process
///
/// Immutable for the duration of a scoring pass. Optional fields are
/// zero-signal when absent, never errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(rename = "patientId")]
    pub patient_id: String,
    #[serde(rename = "primaryCondition", default)]
    pub primary_condition: Option<String>,
    #[serde(rename = "conditionDescription", default)]
    pub condition_description: Option<String>,
    /// Free-text pathology tags selected during intake
    #[serde(default)]
    pub pathologies: Vec<String>,
    /// Structured diagnostic codes, e.g. "E11.9"
    #[serde(rename = "diagnosticCodes", default)]
    pub diagnostic_codes: Vec<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Clinical trial record as stored by the intake platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trial {
    #[serde(rename = "trialId")]
    pub trial_id: String,
    pub title: String,
    pub status: TrialStatus,
    /// Configured capacity; > 0 is read as "slots likely available"
    #[serde(rename = "maxParticipants", default)]
    pub max_participants: i32,
    /// Loosely-typed inclusion-criteria document. Schema varies across
    /// revisions; `core::criteria` absorbs the differences.
    #[serde(default)]
    pub criteria: Option<serde_json::Value>,
}

/// Trial lifecycle states; only `Recruiting` trials are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialStatus {
    Draft,
    Recruiting,
    Active,
    Completed,
    Cancelled,
}

impl TrialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrialStatus::Draft => "draft",
            TrialStatus::Recruiting => "recruiting",
            TrialStatus::Active => "active",
            TrialStatus::Completed => "completed",
            TrialStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a stored status, falling back to `Draft` for unknown values
    /// so stale rows are never treated as recruiting.
    pub fn parse(value: &str) -> Self {
        match value {
            "recruiting" => TrialStatus::Recruiting,
            "active" => TrialStatus::Active,
            "completed" => TrialStatus::Completed,
            "cancelled" => TrialStatus::Cancelled,
            _ => TrialStatus::Draft,
        }
    }
}

/// A scored trial suggestion with its audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialSuggestion {
    #[serde(rename = "trialId")]
    pub trial_id: String,
    pub title: String,
    /// Compatibility score in [0, 100]
    pub score: u32,
    /// Human-readable justifications, in the order the signals fired
    pub reasons: Vec<String>,
}

/// Scoring policy constants
///
/// Fixed point values, not derived; tunable via configuration without
/// touching the matching logic.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    /// Points for matching at least one required diagnostic code
    pub required_codes: u32,
    /// Points for a primary-condition text match
    pub primary_condition: u32,
    /// Points per distinct matching pathology tag
    pub pathology_tag: u32,
    /// Cap on total pathology-tag points
    pub pathology_cap: u32,
    /// Points for a condition-description text match
    pub description: u32,
    /// Points when the trial has capacity configured
    pub capacity: u32,
    /// Hard ceiling on the final score
    pub max_score: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            required_codes: 50,
            primary_condition: 40,
            pathology_tag: 10,
            pathology_cap: 30,
            description: 20,
            capacity: 10,
            max_score: 100,
        }
    }
}
