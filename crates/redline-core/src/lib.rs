//! Docx redline transforms
//!
//! This crate provides the document-side half of the NDA redline pipeline:
//! - `extract_paragraphs`: docx bytes -> ordered paragraph texts
//! - `apply_changes`: docx bytes + change set -> redlined docx bytes
//! - `strip_markup`: redlined docx bytes -> clean docx bytes
//!
//! All operations are pure byte-in/byte-out transforms; persisting the
//! results is the caller's responsibility.

pub mod changes;
pub mod clean;
pub mod error;
pub mod extract;
pub mod redline;

pub use changes::{Change, ChangeSet};
pub use clean::{strip_markup, DEFAULT_COLOR};
pub use error::RedlineError;
pub use extract::extract_paragraphs;
pub use redline::{apply_changes, RedlineOutcome, REDLINE_COLOR};

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_redline_then_clean_keeps_substituted_text() {
        let original = docx_bytes(&["Confidentiality clause A", "Term clause B"]);

        let mut changes: ChangeSet = HashMap::new();
        changes.insert(
            "Confidentiality clause A".to_string(),
            Change::new("Revised confidentiality clause", true, "ok"),
        );

        let outcome = apply_changes(&original, &changes).unwrap();
        assert_eq!(outcome.replaced, 1);
        assert!(outcome.unmatched_keys.is_empty());
        assert_eq!(
            extract_paragraphs(&outcome.bytes).unwrap(),
            vec!["Revised confidentiality clause", "Term clause B"]
        );

        let clean = strip_markup(&outcome.bytes).unwrap();
        assert_eq!(
            extract_paragraphs(&clean).unwrap(),
            vec!["Revised confidentiality clause", "Term clause B"]
        );
    }

    #[test]
    fn test_empty_change_set_is_a_text_noop() {
        let original = docx_bytes(&["Alpha", "", "Beta"]);
        let outcome = apply_changes(&original, &HashMap::new()).unwrap();
        assert_eq!(outcome.replaced, 0);
        assert_eq!(
            extract_paragraphs(&outcome.bytes).unwrap(),
            vec!["Alpha", "", "Beta"]
        );
    }

    #[test]
    fn test_unmatched_key_is_reported_not_raised() {
        let original = docx_bytes(&["Alpha"]);
        let mut changes: ChangeSet = HashMap::new();
        changes.insert(
            "No such paragraph".to_string(),
            Change::new("irrelevant", false, ""),
        );

        let outcome = apply_changes(&original, &changes).unwrap();
        assert_eq!(outcome.replaced, 0);
        assert_eq!(outcome.unmatched_keys, vec!["No such paragraph"]);
        assert_eq!(extract_paragraphs(&outcome.bytes).unwrap(), vec!["Alpha"]);
    }

    #[test]
    fn test_duplicate_paragraphs_both_replaced() {
        let original = docx_bytes(&["Same clause", "Other", "Same clause"]);
        let mut changes: ChangeSet = HashMap::new();
        changes.insert("Same clause".to_string(), Change::new("Rewritten", true, "ok"));

        let outcome = apply_changes(&original, &changes).unwrap();
        assert_eq!(outcome.replaced, 2);
        assert_eq!(
            extract_paragraphs(&outcome.bytes).unwrap(),
            vec!["Rewritten", "Other", "Rewritten"]
        );
    }

    // Color exposes no getter; read it back through its Serialize impl.
    fn color_value(hex: &str) -> serde_json::Value {
        serde_json::to_value(docx_rs::Color::new(hex)).unwrap()
    }

    fn run_colors(bytes: &[u8]) -> Vec<Vec<Option<serde_json::Value>>> {
        let doc = docx_rs::read_docx(bytes).unwrap();
        doc.document
            .children
            .iter()
            .filter_map(|child| match child {
                docx_rs::DocumentChild::Paragraph(para) => Some(
                    para.children
                        .iter()
                        .filter_map(|pc| match pc {
                            docx_rs::ParagraphChild::Run(run) => Some(
                                run.run_property
                                    .color
                                    .as_ref()
                                    .map(|c| serde_json::to_value(c).unwrap()),
                            ),
                            _ => None,
                        })
                        .collect(),
                ),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_redline_marks_only_replaced_runs() {
        let original = docx_bytes(&["Confidentiality clause A", "Term clause B"]);
        let mut changes: ChangeSet = HashMap::new();
        changes.insert(
            "Confidentiality clause A".to_string(),
            Change::new("Revised confidentiality clause", true, "ok"),
        );

        let red = color_value(REDLINE_COLOR);
        let redlined = apply_changes(&original, &changes).unwrap().bytes;
        let colors = run_colors(&redlined);
        assert_eq!(colors[0], vec![Some(red.clone())]);
        assert!(colors[1].iter().all(|c| c.as_ref() != Some(&red)));

        let black = color_value(DEFAULT_COLOR);
        let clean = strip_markup(&redlined).unwrap();
        for para in run_colors(&clean) {
            for color in para {
                assert_eq!(color.as_ref(), Some(&black));
            }
        }
    }

    // Idempotence is semantic: the docx archive itself is not a byte fixed
    // point under a read/write cycle, but texts and colors must be.
    #[test]
    fn test_strip_markup_is_idempotent() {
        let original = docx_bytes(&["Alpha", "Beta"]);
        let mut changes: ChangeSet = HashMap::new();
        changes.insert("Alpha".to_string(), Change::new("Gamma", true, "ok"));

        let redlined = apply_changes(&original, &changes).unwrap().bytes;
        let once = strip_markup(&redlined).unwrap();
        let twice = strip_markup(&once).unwrap();

        assert_eq!(
            extract_paragraphs(&once).unwrap(),
            extract_paragraphs(&twice).unwrap()
        );
        assert_eq!(run_colors(&once), run_colors(&twice));

        let black = color_value(DEFAULT_COLOR);
        for para in run_colors(&twice) {
            for color in para {
                assert_eq!(color.as_ref(), Some(&black));
            }
        }
    }
}
