//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during content extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Native PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// Page rasterization failed.
    #[error("Rasterization error: {0}")]
    Raster(String),

    /// OCR engine failed.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
