//! Extraction outcome types.

/// Which stage produced the final text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    /// Embedded text from the PDF content streams.
    Native,
    /// Rasterized pages recognized with OCR.
    Ocr,
    /// Neither stage produced any text.
    None,
}

/// Result of one raster+OCR pass.
///
/// A page-level failure stops the pass but keeps the text recognized up
/// to that point, so partial documents still classify.
#[derive(Debug, Clone, Default)]
pub struct OcrPass {
    /// Text recognized before the pass ended, in page order.
    pub text: String,
    /// Error that stopped the pass early, if any.
    pub error: Option<String>,
}

impl OcrPass {
    /// Create an outcome for a pass that recognized every page.
    pub fn complete(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    /// Create an outcome for a pass stopped by a page failure.
    pub fn stopped(text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: Some(error.into()),
        }
    }
}

/// Outcome of the two-stage extraction.
///
/// Stage failures are captured here instead of propagating, so one bad
/// document degrades to an empty result rather than failing the batch.
/// Empty `text` signals total extraction failure and is a value for the
/// caller to check, not an error.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Trimmed extracted text, possibly empty.
    pub text: String,
    /// Error raised by the native stage, if any.
    pub native_error: Option<String>,
    /// Error raised by the raster/OCR stage, if any.
    pub ocr_error: Option<String>,
    /// Stage that produced `text`.
    pub method: ExtractionMethod,
}

impl Extraction {
    /// Check if extraction produced any content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
