use std::collections::HashSet;

/// Minimum length a shared token must exceed to count towards a match
const TOKEN_MIN_CHARS: usize = 3;

/// Minimum number of distinct shared long tokens for a token-level match
const SHARED_TOKEN_THRESHOLD: usize = 2;

/// Loose, case-insensitive matcher for legacy free-text condition fields
///
/// Tried in order, short-circuiting on the first hit:
/// 1. exact equality after lowercase + trim
/// 2. substring containment in either direction
/// 3. at least 2 distinct shared whitespace tokens longer than 3 characters
///
/// This bridges inconsistent legacy text entry; false positives are an
/// accepted tradeoff for recall. No stemming or accent folding — that
/// belongs to the disease-code catalog's search, not this matcher.
pub fn fuzzy_matches(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return false;
    }

    if a == b {
        return true;
    }

    if a.contains(&b) || b.contains(&a) {
        return true;
    }

    let tokens_a: HashSet<&str> = long_tokens(&a).collect();
    let tokens_b: HashSet<&str> = long_tokens(&b).collect();

    tokens_a.intersection(&tokens_b).count() >= SHARED_TOKEN_THRESHOLD
}

fn long_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() > TOKEN_MIN_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_case_insensitive() {
        assert!(fuzzy_matches("Diabetes", "diabetes"));
        assert!(fuzzy_matches("  Hipertensión  ", "hipertensión"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!fuzzy_matches("", ""));
        assert!(!fuzzy_matches("diabetes", ""));
        assert!(!fuzzy_matches("   ", "diabetes"));
    }

    #[test]
    fn test_substring_both_directions() {
        assert!(fuzzy_matches("Diabetes tipo 2", "diabetes"));
        assert!(fuzzy_matches("diabetes", "Diabetes tipo 2"));
    }

    #[test]
    fn test_shared_long_tokens() {
        // "insuficiencia" and "cardiaca" are shared and longer than 3 chars
        assert!(fuzzy_matches(
            "insuficiencia cardiaca aguda",
            "paciente con insuficiencia cardiaca"
        ));
    }

    #[test]
    fn test_one_shared_token_is_not_enough() {
        assert!(!fuzzy_matches(
            "insuficiencia renal",
            "insuficiencia cardiaca"
        ));
    }

    #[test]
    fn test_short_tokens_do_not_count() {
        // "de" and "la" are shared but too short; only one long token overlaps
        assert!(!fuzzy_matches(
            "cancer de la piel",
            "melanoma de la dermis"
        ));
    }

    #[test]
    fn test_unrelated_text_does_not_match() {
        assert!(!fuzzy_matches("asma", "migraña crónica"));
    }
}
