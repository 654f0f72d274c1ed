//! Paragraph text extraction from `.docx` bytes.

use crate::error::RedlineError;
use docx_rs::{Docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

/// Parse `.docx` bytes into a `Docx` document object.
pub(crate) fn load_docx(bytes: &[u8]) -> Result<Docx, RedlineError> {
    docx_rs::read_docx(bytes).map_err(|e| RedlineError::DocumentFormat(e.to_string()))
}

/// Extract one string per paragraph, in document order.
///
/// Empty paragraphs yield empty strings; nothing is filtered. Table content
/// is not walked, matching the paragraph-only document model.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<String>, RedlineError> {
    let doc = load_docx(bytes)?;

    let mut paragraphs = Vec::new();
    for child in &doc.document.children {
        if let DocumentChild::Paragraph(para) = child {
            paragraphs.push(paragraph_text(para));
        }
    }

    Ok(paragraphs)
}

/// Concatenated run text of a paragraph.
///
/// This is the single definition of "the paragraph's text": the extractor
/// and the redline transform both use it, so a key built from extracted text
/// always matches the paragraph it came from.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    collect_text(&paragraph.children, &mut text);
    text
}

fn collect_text(children: &[ParagraphChild], output: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        output.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => {
                collect_text(&link.children, output);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::Run;

    fn docx_bytes(docx: Docx) -> Vec<u8> {
        let mut cursor = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_extract_preserves_order() {
        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("First")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Second")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Third")));

        let paragraphs = extract_paragraphs(&docx_bytes(docx)).unwrap();
        assert_eq!(paragraphs, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_extract_keeps_empty_paragraphs() {
        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Before")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("After")));

        let paragraphs = extract_paragraphs(&docx_bytes(docx)).unwrap();
        assert_eq!(paragraphs, vec!["Before", "", "After"]);
    }

    #[test]
    fn test_extract_joins_split_runs() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Confidentiality "))
                .add_run(Run::new().add_text("clause A")),
        );

        let paragraphs = extract_paragraphs(&docx_bytes(docx)).unwrap();
        assert_eq!(paragraphs, vec!["Confidentiality clause A"]);
    }

    #[test]
    fn test_extract_rejects_garbage() {
        let err = extract_paragraphs(b"not a docx file").unwrap_err();
        assert!(matches!(err, RedlineError::DocumentFormat(_)));
    }
}
