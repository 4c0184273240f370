use serde_json::Value;

/// Alternate list keys that trial criteria documents have used for
/// condition names across schema revisions. None were ever backfilled,
/// so all of them stay readable.
const CONDITION_LIST_KEYS: [&str; 3] = ["conditions", "diseases", "medicalConditions"];

/// Flatten the condition text of a loosely-typed criteria document
///
/// Reads the singular `diagnosis` field plus every legacy list key,
/// lowercases and trims each entry, and drops empties and non-strings.
/// Returns an empty list when the document defines no textual field,
/// which the scorer treats as zero-signal rather than an error.
pub fn extract_conditions(criteria: &Value) -> Vec<String> {
    let mut conditions = Vec::new();

    if let Some(diagnosis) = criteria.get("diagnosis").and_then(Value::as_str) {
        push_normalized(&mut conditions, diagnosis);
    }

    for key in CONDITION_LIST_KEYS {
        if let Some(entries) = criteria.get(key).and_then(Value::as_array) {
            for entry in entries {
                if let Some(text) = entry.as_str() {
                    push_normalized(&mut conditions, text);
                }
            }
        }
    }

    conditions
}

/// Diagnostic codes the trial requires at least one of
pub fn required_codes(criteria: &Value) -> Vec<String> {
    string_list(criteria, "requiredCodes")
}

/// Diagnostic codes that disqualify a patient outright
pub fn excluded_codes(criteria: &Value) -> Vec<String> {
    string_list(criteria, "excludedCodes")
}

fn string_list(criteria: &Value, key: &str) -> Vec<String> {
    criteria
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn push_normalized(conditions: &mut Vec<String>, text: &str) {
    let normalized = text.trim().to_lowercase();
    if !normalized.is_empty() {
        conditions.push(normalized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_from_all_legacy_keys() {
        let criteria = json!({
            "diagnosis": "Diabetes tipo 2",
            "conditions": ["Hipertensión"],
            "diseases": ["Obesidad"],
            "medicalConditions": ["Dislipidemia"],
        });

        let conditions = extract_conditions(&criteria);

        assert_eq!(
            conditions,
            vec!["diabetes tipo 2", "hipertensión", "obesidad", "dislipidemia"]
        );
    }

    #[test]
    fn test_lowercases_and_trims() {
        let criteria = json!({ "conditions": ["  ASMA Crónica  "] });
        assert_eq!(extract_conditions(&criteria), vec!["asma crónica"]);
    }

    #[test]
    fn test_empty_document_yields_empty_list() {
        assert!(extract_conditions(&json!({})).is_empty());
        assert!(extract_conditions(&json!({ "maxParticipants": 30 })).is_empty());
    }

    #[test]
    fn test_non_string_entries_ignored() {
        let criteria = json!({
            "diagnosis": 42,
            "conditions": ["asma", 7, null, { "name": "ignored" }, ""],
        });
        assert_eq!(extract_conditions(&criteria), vec!["asma"]);
    }

    #[test]
    fn test_code_lists() {
        let criteria = json!({
            "requiredCodes": ["E11", " E10 ", ""],
            "excludedCodes": ["I50"],
        });

        assert_eq!(required_codes(&criteria), vec!["E11", "E10"]);
        assert_eq!(excluded_codes(&criteria), vec!["I50"]);
    }

    #[test]
    fn test_missing_code_lists_are_empty() {
        let criteria = json!({ "diagnosis": "asma" });
        assert!(required_codes(&criteria).is_empty());
        assert!(excluded_codes(&criteria).is_empty());
    }
}
