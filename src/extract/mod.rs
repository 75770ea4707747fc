mod docx;
mod error;
mod media;
mod pdf;
mod registry;


pub use docx::DocxExtractor;
pub use error::ExtractionError;
pub use media::MediaType;
pub use pdf::PdfExtractor;
pub use registry::ExtractorRegistry;

/// Outcome of turning an uploaded document into plain text
pub type ExtractionResult = Result<String, ExtractionError>;

/// Core trait that all document extractors must implement
pub trait Extractor: Send + Sync {
    /// Media type this extractor understands
    fn media_type(&self) -> MediaType;

    /// Extract plain text from raw document bytes
    ///
    /// # Arguments
    /// * `bytes` - Raw file contents as uploaded
    ///
    /// # Returns
    /// The document text, or an error describing why it could not be read.
    /// Implementations never panic on malformed input.
    fn extract(&self, bytes: &[u8]) -> ExtractionResult;
}
