//! Schemas the models are instructed to return.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One problematic clause identified by the analysis model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseSuggestion {
    /// The clause text exactly as it appears in the document
    pub original: String,
    /// Human-readable explanation of the problem
    pub issue: String,
    /// Replacement clause text
    pub suggestion: String,
}

/// Full response schema of the analysis and feedback prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    pub clauses: Vec<ClauseSuggestion>,
}

/// Response schema of the validation prompt.
///
/// `suggested_changes` is parsed but never applied per clause; only the
/// top-level `valid`/`feedback` pair is attached to the change set. The
/// richer field is kept so the full model output survives into the API
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub feedback: String,
    #[serde(default)]
    pub suggested_changes: HashMap<String, String>,
}
