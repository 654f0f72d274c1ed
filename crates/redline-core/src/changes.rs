//! Change set model shared by the analysis layer and the redline transform.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single suggested replacement for one paragraph of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Replacement text for the matched paragraph
    pub suggestion: String,
    /// Whether the validation model judged the suggestion sound
    pub validated: bool,
    /// Validation feedback or, on the feedback path, the user's own words
    pub feedback: String,
}

/// Replacements keyed by the exact text of the paragraph they apply to.
///
/// Matching by verbatim text is a documented limitation: two paragraphs with
/// identical text both receive the same replacement, and any whitespace
/// difference between a key and the real paragraph text causes a silent miss.
pub type ChangeSet = HashMap<String, Change>;

impl Change {
    pub fn new(suggestion: impl Into<String>, validated: bool, feedback: impl Into<String>) -> Self {
        Self {
            suggestion: suggestion.into(),
            validated,
            feedback: feedback.into(),
        }
    }
}
