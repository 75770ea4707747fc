mod error;


pub use error::UploadError;

use crate::extract::{ExtractionResult, ExtractorRegistry, MediaType};
use std::path::Path;

/// Default upload cap, matching the page framework's 200 MB limit
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 200 * 1024 * 1024;

/// A document accepted at the upload boundary
#[derive(Debug, Clone)]
pub struct Upload {
    /// File name as uploaded (no directories)
    pub file_name: String,
    /// Declared media type
    pub media_type: MediaType,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Accept in-memory bytes with a declared media type
    pub fn new(
        file_name: impl Into<String>,
        media_type: MediaType,
        bytes: Vec<u8>,
        max_bytes: u64,
    ) -> Result<Self, UploadError> {
        if bytes.len() as u64 > max_bytes {
            return Err(UploadError::FileTooLarge {
                size: bytes.len() as u64,
                max: max_bytes,
            });
        }

        Ok(Self {
            file_name: file_name.into(),
            media_type,
            bytes,
        })
    }

    /// Read a file from disk
    ///
    /// The media type is `declared` when given, otherwise taken from the file
    /// extension. Only PDF and DOCX are accepted.
    pub fn from_path(
        path: &Path,
        declared: Option<MediaType>,
        max_bytes: u64,
    ) -> Result<Self, UploadError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let media_type = declared
            .or_else(|| MediaType::from_path(path))
            .ok_or_else(|| UploadError::UnsupportedType(file_name.clone()))?;

        // Check size before reading the whole file into memory
        let size = std::fs::metadata(path)?.len();
        if size > max_bytes {
            return Err(UploadError::FileTooLarge {
                size,
                max: max_bytes,
            });
        }

        let bytes = std::fs::read(path)?;
        tracing::debug!(
            "[upload] accepted {} ({}, {} bytes)",
            file_name,
            media_type.mime(),
            bytes.len()
        );

        Self::new(file_name, media_type, bytes, max_bytes)
    }

    /// Run the extractor matching this upload's declared type
    pub fn extract(&self, registry: &ExtractorRegistry) -> ExtractionResult {
        registry.extract(self.media_type, &self.bytes)
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
