use super::{ExtractionError, ExtractionResult, Extractor, MediaType};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use std::panic::{self, AssertUnwindSafe};

/// Extracts paragraph text from Word (.docx) documents via docx-rs
pub struct DocxExtractor;

impl Extractor for DocxExtractor {
    fn media_type(&self) -> MediaType {
        MediaType::Docx
    }

    fn extract(&self, bytes: &[u8]) -> ExtractionResult {
        tracing::debug!("[extract] DOCX input: {} bytes", bytes.len());

        let doc = match panic::catch_unwind(AssertUnwindSafe(|| docx_rs::read_docx(bytes))) {
            Ok(Ok(doc)) => doc,
            Ok(Err(e)) => {
                tracing::warn!("[extract] DOCX parsing failed: {}", e);
                return Err(ExtractionError::Docx(e.to_string()));
            }
            Err(_panic) => {
                tracing::warn!("[extract] DOCX parsing panicked");
                return Err(ExtractionError::Docx(
                    "document could not be parsed (malformed content)".to_string(),
                ));
            }
        };

        // Only top-level body paragraphs count; tables and section
        // properties are not paragraphs
        let paragraphs: Vec<String> = doc
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(Self::paragraph_text(para)),
                _ => None,
            })
            .collect();

        let text = paragraphs.join("\n");

        tracing::info!(
            "[extract] DOCX extracted: {} paragraphs, {} chars",
            paragraphs.len(),
            text.chars().count()
        );

        Ok(text)
    }
}

impl DocxExtractor {
    /// Text of every run in a paragraph, including runs inside hyperlinks
    fn paragraph_text(para: &Paragraph) -> String {
        let mut out = String::new();
        for child in &para.children {
            match child {
                ParagraphChild::Run(run) => Self::push_run(run, &mut out),
                ParagraphChild::Hyperlink(link) => {
                    for inner in &link.children {
                        if let ParagraphChild::Run(run) = inner {
                            Self::push_run(run, &mut out);
                        }
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn push_run(run: &Run, out: &mut String) {
        for run_child in &run.children {
            match run_child {
                RunChild::Text(text) => out.push_str(&text.text),
                RunChild::Tab(_) => out.push('\t'),
                RunChild::Break(_) => out.push('\n'),
                _ => {}
            }
        }
    }
}
