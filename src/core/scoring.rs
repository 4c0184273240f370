use crate::core::{
    codes::codes_match,
    criteria::{excluded_codes, extract_conditions, required_codes},
    text::fuzzy_matches,
};
use crate::models::{PatientProfile, ScoringWeights, Trial};

/// Compute the compatibility score (0-100) of a patient against one trial
///
/// Returns the score plus one explanatory reason per triggered signal.
/// Signals are independent and additive; the only suppressing rule is the
/// exclusion short-circuit, which always runs first:
/// - no criteria document -> 0 with no reasons
/// - any patient code matching an excluded code -> 0 with exactly one reason
/// - required-code match +50, primary condition +40, pathology tags +10
///   each (capped at 30), description +20, configured capacity +10
///
/// Missing optional fields contribute zero; a 0 score is a normal result,
/// never an error.
pub fn score_trial(
    patient: &PatientProfile,
    trial: &Trial,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    let criteria = match &trial.criteria {
        Some(criteria) if !criteria.is_null() => criteria,
        _ => return (0, vec![]),
    };

    // Eliminatory check: an excluded-code hit zeroes the score outright
    let excluded = excluded_codes(criteria);
    let excluded_hits: Vec<&str> = patient
        .diagnostic_codes
        .iter()
        .filter(|code| excluded.iter().any(|ex| codes_match(code, ex)))
        .map(String::as_str)
        .collect();

    if !excluded_hits.is_empty() {
        return (
            0,
            vec![format!(
                "Excluded: diagnostic code {} matches the trial's exclusion criteria",
                excluded_hits.join(", ")
            )],
        );
    }

    let mut score = 0u32;
    let mut reasons = Vec::new();

    // Required diagnostic codes
    let required = required_codes(criteria);
    let matched_codes: Vec<&str> = patient
        .diagnostic_codes
        .iter()
        .filter(|code| required.iter().any(|req| codes_match(code, req)))
        .map(String::as_str)
        .collect();

    if !matched_codes.is_empty() {
        score += weights.required_codes;
        reasons.push(format!(
            "Diagnostic code match: {}",
            matched_codes.join(", ")
        ));
    }

    let conditions = extract_conditions(criteria);
    if !conditions.is_empty() {
        // Primary condition
        if let Some(primary) = &patient.primary_condition {
            if conditions.iter().any(|c| fuzzy_matches(primary, c)) {
                score += weights.primary_condition;
                reasons.push(format!(
                    "Primary condition \"{}\" matches the trial's conditions",
                    primary.trim()
                ));
            }
        }

        // Pathology tags, 10 points per distinct matching tag, capped
        let mut matched_tags: Vec<&str> = Vec::new();
        for tag in &patient.pathologies {
            let normalized = tag.trim();
            if matched_tags.iter().any(|t| t.eq_ignore_ascii_case(normalized)) {
                continue;
            }
            if conditions.iter().any(|c| fuzzy_matches(tag, c)) {
                matched_tags.push(normalized);
            }
        }
        if !matched_tags.is_empty() {
            let tag_points =
                (matched_tags.len() as u32 * weights.pathology_tag).min(weights.pathology_cap);
            score += tag_points;
            reasons.push(format!(
                "Pathology tags match: {}",
                matched_tags.join(", ")
            ));
        }

        // Free-text condition description
        if let Some(description) = &patient.condition_description {
            if conditions.iter().any(|c| fuzzy_matches(description, c)) {
                score += weights.description;
                reasons.push(
                    "Condition description matches the trial's conditions".to_string(),
                );
            }
        }
    }

    // Capacity is a tiebreaker signal, not a match on its own: it only
    // counts once some clinical signal has fired
    if score > 0 && trial.max_participants > 0 {
        score += weights.capacity;
        reasons.push("Trial has participant capacity configured".to_string());
    }

    (score.min(weights.max_score), reasons)
}
