//! Clean transform: strip redline markup while keeping the substituted text.

use crate::error::RedlineError;
use crate::extract::load_docx;
use crate::redline::write_docx;
use docx_rs::{Color, DocumentChild, ParagraphChild};

/// Default run color restored by the clean transform.
pub const DEFAULT_COLOR: &str = "000000";

/// Reset every run color in every paragraph to [`DEFAULT_COLOR`].
///
/// Pure attribute rewrite. Text content is untouched, so cleaning a redlined
/// document keeps the substituted suggestions. Idempotent.
pub fn strip_markup(bytes: &[u8]) -> Result<Vec<u8>, RedlineError> {
    let mut doc = load_docx(bytes)?;

    for child in doc.document.children.iter_mut() {
        if let DocumentChild::Paragraph(para) = child {
            reset_colors(&mut para.children);
        }
    }

    write_docx(doc)
}

fn reset_colors(children: &mut [ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                run.run_property.color = Some(Color::new(DEFAULT_COLOR));
            }
            ParagraphChild::Hyperlink(link) => {
                reset_colors(&mut link.children);
            }
            _ => {}
        }
    }
}
