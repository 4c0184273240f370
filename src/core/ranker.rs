use crate::core::scoring::score_trial;
use crate::models::{PatientProfile, ScoringWeights, Trial, TrialStatus, TrialSuggestion};

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankedSuggestions {
    pub suggestions: Vec<TrialSuggestion>,
    pub total_trials: usize,
}

/// Suggestion ranking orchestrator
///
/// Pure and stateless given its inputs: scores every recruiting trial
/// against one patient, drops non-matches, and sorts by score. Data
/// loading lives with the caller.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank candidate trials for a patient
    ///
    /// Trials not in `Recruiting` state are skipped even if handed in, so
    /// callers do not have to pre-filter. Score-0 results are discarded;
    /// the remainder is sorted descending by score with ties kept in the
    /// input order (stable sort, required for reproducibility).
    pub fn rank(&self, patient: &PatientProfile, trials: Vec<Trial>) -> RankedSuggestions {
        let total_trials = trials.len();

        let mut suggestions: Vec<TrialSuggestion> = trials
            .into_iter()
            .filter(|trial| trial.status == TrialStatus::Recruiting)
            .filter_map(|trial| {
                let (score, reasons) = score_trial(patient, &trial, &self.weights);
                if score == 0 {
                    return None;
                }
                Some(TrialSuggestion {
                    trial_id: trial.trial_id,
                    title: trial.title,
                    score,
                    reasons,
                })
            })
            .collect();

        // Vec::sort_by is stable, so equal scores keep their input order
        suggestions.sort_by(|a, b| b.score.cmp(&a.score));

        RankedSuggestions {
            suggestions,
            total_trials,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
