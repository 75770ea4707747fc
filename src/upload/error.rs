use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to read upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {0} (choose a PDF or DOCX file)")]
    UnsupportedType(String),

    #[error("File too large: {size} bytes (max: {max})")]
    FileTooLarge { size: u64, max: u64 },
}
