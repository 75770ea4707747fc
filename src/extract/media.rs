use std::fmt;
use std::path::Path;

/// Declared media type of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Pdf,
    Docx,
}

impl MediaType {
    pub const PDF_MIME: &'static str = "application/pdf";
    pub const DOCX_MIME: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    /// MIME string as declared by an upload widget
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => Self::PDF_MIME,
            Self::Docx => Self::DOCX_MIME,
        }
    }

    /// Parse a declared MIME type
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        if essence.eq_ignore_ascii_case(Self::PDF_MIME) {
            Some(Self::Pdf)
        } else if essence.eq_ignore_ascii_case(Self::DOCX_MIME) {
            Some(Self::Docx)
        } else {
            None
        }
    }

    /// Map a file extension (without dot) to its media type
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Declared type from a file name's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Docx => write!(f, "DOCX"),
        }
    }
}
