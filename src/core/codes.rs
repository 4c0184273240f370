/// Check whether a patient's diagnostic code satisfies a coded trial criterion
///
/// Diagnostic codes encode a three-level hierarchy (chapter -> category ->
/// subcategory) by string prefixing: `E11` covers `E11.9` and vice versa.
/// Comparison is exact-or-prefix only; codes carry precise clinical
/// semantics, so no fuzzy matching happens here.
pub fn codes_match(patient_code: &str, criterion_code: &str) -> bool {
    let patient = patient_code.trim().to_uppercase();
    let criterion = criterion_code.trim().to_uppercase();

    // Empty codes never match anything, including themselves
    if patient.is_empty() || criterion.is_empty() {
        return false;
    }

    if patient == criterion {
        return true;
    }

    // One code is an ancestor of the other in the hierarchy
    patient.starts_with(&criterion) || criterion.starts_with(&patient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_codes_match() {
        assert!(codes_match("E11.9", "E11.9"));
        assert!(codes_match("I50", "I50"));
    }

    #[test]
    fn test_empty_code_never_matches() {
        assert!(!codes_match("", ""));
        assert!(!codes_match("E11", ""));
        assert!(!codes_match("", "E11"));
        assert!(!codes_match("   ", "E11"));
    }

    #[test]
    fn test_prefix_matches_both_directions() {
        // Patient more specific than criterion
        assert!(codes_match("E11.9", "E11"));
        // Criterion more specific than what the patient has recorded
        assert!(codes_match("E11", "E11.9"));
    }

    #[test]
    fn test_unrelated_codes_do_not_match() {
        assert!(!codes_match("E11.9", "E10"));
        assert!(!codes_match("I50", "E11"));
        assert!(!codes_match("E10.1", "E11.1"));
    }

    #[test]
    fn test_case_and_whitespace_folding() {
        assert!(codes_match("e11.9", "E11.9"));
        assert!(codes_match(" E11 ", "e11.9"));
    }
}
