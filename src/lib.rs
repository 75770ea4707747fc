// Public API exports
pub mod explainer;
pub mod extract;
pub mod samples;
pub mod session;
pub mod upload;

// Re-export main types for convenience
pub use explainer::{detect_terms, explain, glossary, Explanation, GlossaryEntry};

pub use extract::{
    DocxExtractor, ExtractionError, ExtractionResult, Extractor, ExtractorRegistry, MediaType,
    PdfExtractor,
};

pub use samples::{find_sample, Sample, SAMPLES};

pub use session::{
    analyze, choose_clause, prefill, prepare_clause, preview, Analysis, DocumentStatus,
    PreparedClause, EMPTY_CLAUSE_WARNING,
};

pub use upload::{Upload, UploadError, DEFAULT_MAX_UPLOAD_BYTES};
