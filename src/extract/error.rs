use super::MediaType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Error extracting PDF text: {0}")]
    Pdf(String),

    #[error("Error extracting DOCX text: {0}")]
    Docx(String),
}

impl ExtractionError {
    /// Underlying cause without the user-facing prefix
    pub fn cause(&self) -> &str {
        match self {
            Self::Pdf(cause) | Self::Docx(cause) => cause,
        }
    }

    /// Wrap a cause in the variant matching the document's media type
    pub fn for_media(media_type: MediaType, cause: impl Into<String>) -> Self {
        match media_type {
            MediaType::Pdf => Self::Pdf(cause.into()),
            MediaType::Docx => Self::Docx(cause.into()),
        }
    }
}
