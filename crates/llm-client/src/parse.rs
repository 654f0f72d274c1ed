//! Defensive parsing of model output into the expected schemas.
//!
//! The model endpoint enforces no contract on response shape: completions
//! arrive as free text that usually, but not always, contains the requested
//! JSON, sometimes wrapped in markdown code fences or prose. Parsing failure
//! is a first-class, reportable error, never a panic.

use crate::error::LlmError;
use crate::schema::{ClauseAnalysis, ValidationResult};

/// Parse the analysis (or feedback) response.
pub fn parse_analysis(raw: &str) -> Result<ClauseAnalysis, LlmError> {
    parse_payload(raw)
}

/// Parse the validation response.
pub fn parse_validation(raw: &str) -> Result<ValidationResult, LlmError> {
    parse_payload(raw)
}

fn parse_payload<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, LlmError> {
    let payload = extract_json_object(raw)
        .ok_or_else(|| LlmError::malformed("No JSON object found in completion", raw))?;

    serde_json::from_str(payload).map_err(|e| LlmError::malformed(e.to_string(), raw))
}

/// Slice out the outermost `{...}` of the completion text.
///
/// This tolerates code fences and surrounding prose; anything outside the
/// first `{` and the last `}` is discarded before deserialization.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_bare_json() {
        let raw = r#"{"clauses":[{"original":"a","issue":"b","suggestion":"c"}]}"#;
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.clauses.len(), 1);
        assert_eq!(analysis.clauses[0].original, "a");
    }

    #[test]
    fn test_parses_fenced_json() {
        let raw = "Here is the analysis:\n```json\n{\"clauses\":[]}\n```\nLet me know!";
        let analysis = parse_analysis(raw).unwrap();
        assert!(analysis.clauses.is_empty());
    }

    #[test]
    fn test_parses_validation_without_suggested_changes() {
        let raw = r#"{"valid": true, "feedback": "looks sound"}"#;
        let validation = parse_validation(raw).unwrap();
        assert!(validation.valid);
        assert_eq!(validation.feedback, "looks sound");
        assert!(validation.suggested_changes.is_empty());
    }

    #[test]
    fn test_rejects_prose_only_response() {
        let err = parse_analysis("I could not find any problematic clauses.").unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse { .. }));
    }

    #[test]
    fn test_rejects_wrong_schema() {
        let err = parse_analysis(r#"{"paragraphs": []}"#).unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse { .. }));
    }

    #[test]
    fn test_excerpt_is_truncated() {
        let raw = "x".repeat(500);
        let err = parse_analysis(&raw).unwrap_err();
        if let LlmError::MalformedResponse { excerpt, .. } = err {
            assert!(excerpt.len() <= 203);
            assert!(excerpt.ends_with("..."));
        } else {
            panic!("expected MalformedResponse");
        }
    }
}
