//! Interaction flow around the explainer: choosing which text to analyze
//! and packaging the result for display.

use crate::explainer::{explain, Explanation};
use crate::extract::{ExtractionError, ExtractionResult};
use crate::samples::Sample;
use std::fmt;

/// Characters of extracted text shown in the preview
pub const PREVIEW_CHARS: usize = 1000;

/// Characters of extracted text pre-filled as the clause to analyze
pub const PREFILL_CHARS: usize = 500;

/// Shown when there is nothing to analyze
pub const EMPTY_CLAUSE_WARNING: &str = "Please paste a legal clause into the text box";

/// A clause together with its explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub clause: String,
    pub explanation: Explanation,
}

/// First `limit` characters of `text`
fn take_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Preview of extracted text, elided past `PREVIEW_CHARS`
pub fn preview(text: &str) -> String {
    let head = take_chars(text, PREVIEW_CHARS);
    if head.len() < text.len() {
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Clause text pre-filled from an extracted document
pub fn prefill(extracted: &str) -> &str {
    take_chars(extracted, PREFILL_CHARS)
}

/// Pick the clause to analyze: a selected sample, then pasted text,
/// then the prefill of extracted text
pub fn choose_clause(
    sample: Option<&Sample>,
    pasted: Option<&str>,
    extracted: Option<&str>,
) -> String {
    if let Some(sample) = sample {
        return sample.text.to_string();
    }
    if let Some(text) = pasted {
        return text.to_string();
    }
    extracted.map(prefill).unwrap_or_default().to_string()
}

/// What happened to an uploaded document, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Some text came out of the named file
    Extracted(String),
    Failed(ExtractionError),
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extracted(file_name) => write!(f, "Text extracted from {}.", file_name),
            Self::Failed(e) => write!(f, "{}", e),
        }
    }
}

impl DocumentStatus {
    /// Status for an extraction result; an empty document reports nothing
    pub fn from_result(file_name: &str, result: &ExtractionResult) -> Option<Self> {
        match result {
            Ok(text) if text.is_empty() => None,
            Ok(_) => Some(Self::Extracted(file_name.to_string())),
            Err(e) => Some(Self::Failed(e.clone())),
        }
    }
}

/// The clause to analyze and the document status to show before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedClause {
    pub clause: String,
    pub status: Option<DocumentStatus>,
}

/// Resolve every input source at once
///
/// The document is always reported on, even when a sample or pasted text
/// ends up being analyzed instead of it.
pub fn prepare_clause(
    sample: Option<&Sample>,
    pasted: Option<&str>,
    document: Option<(&str, &ExtractionResult)>,
) -> PreparedClause {
    let status = document.and_then(|(name, result)| DocumentStatus::from_result(name, result));
    let extracted = document.and_then(|(_, result)| result.as_deref().ok());

    PreparedClause {
        clause: choose_clause(sample, pasted, extracted),
        status,
    }
}

/// Explain a clause, or `None` when it is blank
pub fn analyze(clause: &str) -> Option<Analysis> {
    if clause.trim().is_empty() {
        tracing::warn!("[session] nothing to analyze");
        return None;
    }

    let explanation = explain(clause);
    tracing::info!(
        "[session] analyzed {} chars, {} terms detected",
        clause.chars().count(),
        explanation.detected_terms.len()
    );

    Some(Analysis {
        clause: clause.to_string(),
        explanation,
    })
}
