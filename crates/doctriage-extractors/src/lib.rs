//! doctriage-extractors - Two-stage PDF text extraction.
//!
//! Extracts document text by reading the text embedded in the PDF content
//! streams first; when a document carries none (scanned pages), every page
//! is rasterized with `pdftoppm` and recognized with `tesseract`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use doctriage_extractors::{OcrConfig, PdfTextSource, TesseractEngine, TextExtractor};
//!
//! let extractor = TextExtractor::new(
//!     Arc::new(PdfTextSource::new()),
//!     Arc::new(TesseractEngine::new(OcrConfig::default())),
//! );
//! let extraction = extractor.extract("docs/invoice.pdf".as_ref()).await;
//! if extraction.text.is_empty() {
//!     // nothing extractable - extraction.native_error / ocr_error say why
//! }
//! ```

mod error;
mod native;
mod ocr;
mod pipeline;
mod types;

pub use error::{ExtractError, ExtractResult};
pub use native::PdfTextSource;
pub use ocr::{OcrConfig, TesseractEngine};
pub use pipeline::TextExtractor;
pub use types::{Extraction, ExtractionMethod, OcrPass};

use std::path::Path;

use async_trait::async_trait;

/// Native (embedded) text stage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NativeTextSource: Send + Sync {
    /// Extract embedded text from the PDF at `path`, all pages in page
    /// order; pages without text contribute nothing.
    async fn extract(&self, path: &Path) -> ExtractResult<String>;
}

/// Raster + OCR fallback stage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Rasterize every page of the PDF at `path` and recognize text, in
    /// page order. A page failure ends the pass but the text recognized
    /// before it is kept on the returned [`OcrPass`]; `Err` is reserved
    /// for failures before any page could be recognized.
    async fn recognize(&self, path: &Path) -> ExtractResult<OcrPass>;
}
