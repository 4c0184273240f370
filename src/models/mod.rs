// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PatientProfile, ScoringWeights, Trial, TrialStatus, TrialSuggestion};
pub use requests::{InvalidateRequest, SuggestionsRequest};
pub use responses::{ErrorResponse, HealthResponse, InvalidateResponse, SuggestionsResponse};
