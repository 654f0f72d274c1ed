//! Analysis orchestrator: document text -> model calls -> redline artifact.

use crate::error::ApiError;
use crate::models::{AnalyzeResponse, FeedbackResponse};
use crate::state::AppState;
use crate::store::{DocumentStatus, Variant};
use llm_client::{parse_analysis, parse_validation, prompts, ClauseAnalysis, ValidationResult};
use redline_core::{apply_changes, extract_paragraphs, Change, ChangeSet};

/// Run the two-model analysis pipeline and produce the redline artifact.
///
/// Nothing is written to storage until both model responses have parsed;
/// if the request future is dropped mid-call, the in-flight completion is
/// abandoned with no artifact left behind.
pub async fn analyze(state: &AppState, document_id: &str) -> Result<AnalyzeResponse, ApiError> {
    let original = state
        .store
        .read_artifact(document_id, Variant::Original)
        .await?;
    let text = extract_paragraphs(&original)?.join("\n");

    tracing::info!(document_id, model = state.primary.id(), "Requesting clause analysis");
    let raw_analysis = state.primary.complete(prompts::analysis_request(&text)).await?;
    let analysis = parse_analysis(&raw_analysis)?;

    let analysis_json =
        serde_json::to_string(&analysis).map_err(|e| ApiError::Internal(e.into()))?;

    tracing::info!(document_id, model = state.validator.id(), "Requesting validation");
    let raw_validation = state
        .validator
        .complete(prompts::validation_request(&analysis_json))
        .await?;
    let validation = parse_validation(&raw_validation)?;

    state.store.set_status(document_id, DocumentStatus::Analyzed).await?;

    let changes = fold_changes(&analysis, &validation);
    redline(state, document_id, &original, &changes).await?;
    state.store.save_analysis(document_id, &analysis).await?;

    Ok(AnalyzeResponse {
        document_id: document_id.to_string(),
        analysis,
        validation,
    })
}

/// Re-run the analysis with the user's feedback folded into the prompt and
/// rebuild the redline artifact from the new suggestions.
pub async fn incorporate_feedback(
    state: &AppState,
    document_id: &str,
    feedback: &str,
) -> Result<FeedbackResponse, ApiError> {
    let previous = state.store.load_analysis(document_id).await?;
    let previous_json =
        serde_json::to_string(&previous).map_err(|e| ApiError::Internal(e.into()))?;

    tracing::info!(document_id, model = state.primary.id(), "Requesting revised analysis");
    let raw = state
        .primary
        .complete(prompts::feedback_request(&previous_json, feedback))
        .await?;
    let new_analysis = parse_analysis(&raw)?;

    let original = state
        .store
        .read_artifact(document_id, Variant::Original)
        .await?;
    let changes = fold_feedback_changes(&new_analysis, feedback);
    redline(state, document_id, &original, &changes).await?;
    state.store.save_analysis(document_id, &new_analysis).await?;

    Ok(FeedbackResponse {
        document_id: document_id.to_string(),
        new_analysis,
    })
}

async fn redline(
    state: &AppState,
    document_id: &str,
    original: &[u8],
    changes: &ChangeSet,
) -> Result<(), ApiError> {
    let outcome = apply_changes(original, changes)?;

    if !outcome.unmatched_keys.is_empty() {
        // Text matching is verbatim; model-echoed clauses that drifted from
        // the document text are dropped, not errors.
        tracing::warn!(
            document_id,
            unmatched = outcome.unmatched_keys.len(),
            "Change-set keys matched no paragraph"
        );
    }

    state
        .store
        .write_artifact(document_id, Variant::Redline, &outcome.bytes)
        .await?;
    state.store.set_status(document_id, DocumentStatus::Redlined).await?;

    tracing::info!(document_id, replaced = outcome.replaced, "Redline artifact written");
    Ok(())
}

/// Fold clause suggestions into a change set, attaching the validation's
/// top-level verdict uniformly to every entry. The validation's per-clause
/// `suggested_changes` is deliberately not consulted here.
fn fold_changes(analysis: &ClauseAnalysis, validation: &ValidationResult) -> ChangeSet {
    analysis
        .clauses
        .iter()
        .map(|clause| {
            (
                clause.original.clone(),
                Change::new(&clause.suggestion, validation.valid, &validation.feedback),
            )
        })
        .collect()
}

/// Fold a feedback-driven analysis into a change set; each entry carries the
/// user's own feedback text and is not re-validated.
fn fold_feedback_changes(analysis: &ClauseAnalysis, feedback: &str) -> ChangeSet {
    analysis
        .clauses
        .iter()
        .map(|clause| {
            (
                clause.original.clone(),
                Change::new(&clause.suggestion, false, feedback),
            )
        })
        .collect()
}
