//! Trialmatch - trial-patient compatibility service for the clinical intake platform
//!
//! This library provides the compatibility engine that decides which
//! recruiting clinical trials a patient is eligible for and ranks them by
//! a bounded, explainable score. It reconciles structured hierarchical
//! diagnostic codes with legacy free-text condition fields.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{codes_match, fuzzy_matches, score_trial, RankedSuggestions, Ranker};
pub use crate::models::{
    PatientProfile, ScoringWeights, SuggestionsRequest, SuggestionsResponse, Trial, TrialStatus,
    TrialSuggestion,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert!(codes_match("E11.9", "E11"));
        assert!(fuzzy_matches("Diabetes tipo 2", "diabetes"));
    }
}
