use super::{ExtractionError, ExtractionResult, Extractor, MediaType};
use std::panic::{self, AssertUnwindSafe};

/// Extracts page text from PDF documents via pdf-extract
pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    fn media_type(&self) -> MediaType {
        MediaType::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> ExtractionResult {
        tracing::debug!("[extract] PDF input: {} bytes", bytes.len());

        // pdf-extract (and its font parsers) can panic on malformed fonts/glyphs
        let pages = match panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        })) {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => {
                tracing::warn!("[extract] PDF extraction failed: {}", e);
                return Err(ExtractionError::Pdf(e.to_string()));
            }
            Err(_panic) => {
                tracing::warn!("[extract] PDF extraction panicked - likely malformed fonts");
                return Err(ExtractionError::Pdf(
                    "document could not be parsed (malformed content)".to_string(),
                ));
            }
        };

        let text = Self::join_pages(&pages);

        tracing::info!(
            "[extract] PDF extracted: {} pages, {} chars",
            pages.len(),
            text.chars().count()
        );

        Ok(text)
    }
}

impl PdfExtractor {
    /// Concatenate page text in document order; empty pages add nothing
    pub(crate) fn join_pages(pages: &[String]) -> String {
        pages.concat()
    }
}
