//! Redline transform: apply suggested replacements with red markup.

use crate::changes::ChangeSet;
use crate::error::RedlineError;
use crate::extract::{load_docx, paragraph_text};
use docx_rs::{Docx, DocumentChild, ParagraphChild, Run};

/// Red-equivalent run color used to mark replaced text.
pub const REDLINE_COLOR: &str = "FF0000";

/// Result of a redline pass: the rewritten document plus diagnostics.
#[derive(Debug, Clone)]
pub struct RedlineOutcome {
    /// The redlined document as `.docx` bytes
    pub bytes: Vec<u8>,
    /// Number of paragraphs that were replaced
    pub replaced: usize,
    /// Change-set keys that matched no paragraph (dropped, not an error)
    pub unmatched_keys: Vec<String>,
}

/// Replace every paragraph whose exact text is a key of `changes` with the
/// keyed suggestion, rendered as a single run colored [`REDLINE_COLOR`].
///
/// One linear scan over paragraphs; change-set lookup is by text, so two
/// paragraphs with identical text both receive the same replacement.
/// Paragraphs without a matching key keep their text and formatting.
/// Keys that match nothing are silently dropped and reported back in
/// [`RedlineOutcome::unmatched_keys`] for diagnostics.
pub fn apply_changes(bytes: &[u8], changes: &ChangeSet) -> Result<RedlineOutcome, RedlineError> {
    let mut doc = load_docx(bytes)?;

    let mut replaced = 0usize;
    let mut matched: std::collections::HashSet<String> = std::collections::HashSet::new();

    for child in doc.document.children.iter_mut() {
        if let DocumentChild::Paragraph(para) = child {
            let text = paragraph_text(para);
            if let Some(change) = changes.get(&text) {
                para.children = vec![ParagraphChild::Run(Box::new(
                    Run::new()
                        .add_text(change.suggestion.clone())
                        .color(REDLINE_COLOR),
                ))];
                replaced += 1;
                matched.insert(text);
            }
        }
    }

    let unmatched_keys = changes
        .keys()
        .filter(|k| !matched.contains(k.as_str()))
        .cloned()
        .collect();

    let bytes = write_docx(doc)?;

    Ok(RedlineOutcome {
        bytes,
        replaced,
        unmatched_keys,
    })
}

/// Serialize a document object back to `.docx` bytes.
pub(crate) fn write_docx(doc: Docx) -> Result<Vec<u8>, RedlineError> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    doc.build()
        .pack(&mut cursor)
        .map_err(|e| RedlineError::WriteError(e.to_string()))?;
    Ok(cursor.into_inner())
}
