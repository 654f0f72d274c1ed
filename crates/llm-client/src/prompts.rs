//! Fixed instruction templates for the three model calls.

use crate::client::CompletionRequest;

/// Primary analysis: identify problematic clauses in the NDA text.
pub const ANALYSIS_SYSTEM: &str = r#"You are an expert legal AI assistant specializing in NDA analysis.
Analyze the following NDA text and identify problematic clauses.
For each problematic clause, provide:
1. The clause text
2. Why it's problematic
3. A suggested improvement
Format your response as JSON with the following structure:
{
    "clauses": [
        {
            "original": "clause text",
            "issue": "explanation of the problem",
            "suggestion": "improved clause text"
        }
    ]
}"#;

/// Secondary validation: judge the legal soundness of an analysis.
pub const VALIDATION_SYSTEM: &str = r#"You are a legal validation AI assistant.
Review the following NDA clause analysis and suggestions.
Validate if the suggestions are legally sound and appropriate.
Provide your feedback in JSON format:
{
    "valid": true/false,
    "feedback": "explanation",
    "suggested_changes": {
        "clause_id": "improved suggestion"
    }
}"#;

/// Feedback-aware revision: rework a prior analysis given user feedback.
pub const FEEDBACK_SYSTEM: &str = r#"You are an expert legal AI assistant.
Review the user feedback and previous analysis to generate improved suggestions.
Consider the feedback carefully and provide updated suggestions that address the user's concerns.
Format your response as JSON with the same structure as the analysis."#;

/// Request for the primary analysis pass over a document's text.
pub fn analysis_request(document_text: &str) -> CompletionRequest {
    CompletionRequest::new(ANALYSIS_SYSTEM, document_text)
}

/// Request for the validation pass over a serialized analysis.
pub fn validation_request(analysis_json: &str) -> CompletionRequest {
    CompletionRequest::new(VALIDATION_SYSTEM, analysis_json)
}

/// Request for the feedback pass over a prior analysis plus user feedback.
pub fn feedback_request(previous_analysis_json: &str, feedback: &str) -> CompletionRequest {
    CompletionRequest::new(
        FEEDBACK_SYSTEM,
        format!(
            "Previous analysis: {}\nUser feedback: {}",
            previous_analysis_json, feedback
        ),
    )
}
