use super::{DocxExtractor, ExtractionError, ExtractionResult, Extractor, MediaType, PdfExtractor};
use std::collections::HashMap;

/// Dispatch table from declared media type to extractor
pub struct ExtractorRegistry {
    map: HashMap<MediaType, Box<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with the PDF and DOCX extractors installed
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(PdfExtractor);
        registry.register(DocxExtractor);
        registry
    }

    /// Create a registry with no extractors
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register an extractor under the media type it reports,
    /// replacing any previous one
    pub fn register(&mut self, extractor: impl Extractor + 'static) {
        self.map.insert(extractor.media_type(), Box::new(extractor));
    }

    /// Select the extractor for a declared media type
    pub fn select(&self, media_type: MediaType) -> Option<&dyn Extractor> {
        self.map.get(&media_type).map(|e| &**e)
    }

    /// Extract text using the extractor for `media_type`
    ///
    /// The caller declares the type; bytes are never sniffed.
    pub fn extract(&self, media_type: MediaType, bytes: &[u8]) -> ExtractionResult {
        match self.select(media_type) {
            Some(extractor) => extractor.extract(bytes),
            None => Err(ExtractionError::for_media(
                media_type,
                format!("no extractor registered for {}", media_type.mime()),
            )),
        }
    }

    /// Get the number of registered extractors
    pub fn extractor_count(&self) -> usize {
        self.map.len()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
