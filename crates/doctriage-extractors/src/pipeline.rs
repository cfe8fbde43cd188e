//! Two-stage extraction with OCR fallback.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::types::{Extraction, ExtractionMethod};
use crate::{NativeTextSource, OcrEngine};

/// Extracts document text, trying embedded text first and falling back to
/// raster+OCR when the document carries none.
///
/// Stage failures are recorded on the returned [`Extraction`] instead of
/// propagating, so extraction never fails the caller; an empty result is
/// the signal to check.
pub struct TextExtractor {
    native: Arc<dyn NativeTextSource>,
    ocr: Arc<dyn OcrEngine>,
}

impl TextExtractor {
    /// Create an extractor over the two stage implementations.
    pub fn new(native: Arc<dyn NativeTextSource>, ocr: Arc<dyn OcrEngine>) -> Self {
        Self { native, ocr }
    }

    /// Extract text from the PDF at `path`.
    ///
    /// The OCR pass only runs when the trimmed native text is empty. OCR
    /// errors are caught at whole-document level, not per page, so one
    /// bad page can void the entire pass.
    pub async fn extract(&self, path: &Path) -> Extraction {
        let mut native_error = None;
        let mut text = match self.native.extract(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "native extraction failed");
                native_error = Some(e.to_string());
                String::new()
            }
        };

        let mut method = ExtractionMethod::Native;
        let mut ocr_error = None;

        if text.trim().is_empty() {
            debug!(path = %path.display(), "no embedded text, falling back to OCR");
            method = ExtractionMethod::Ocr;
            match self.ocr.recognize(path).await {
                Ok(pass) => {
                    if let Some(e) = pass.error {
                        warn!(path = %path.display(), error = %e, "OCR pass stopped early");
                        ocr_error = Some(e);
                    }
                    text = pass.text;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "OCR fallback failed");
                    ocr_error = Some(e.to_string());
                }
            }
        }

        let text = text.trim().to_string();
        if text.is_empty() {
            method = ExtractionMethod::None;
        }

        Extraction {
            text,
            native_error,
            ocr_error,
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::types::OcrPass;
    use crate::{MockNativeTextSource, MockOcrEngine};

    fn extractor(native: MockNativeTextSource, ocr: MockOcrEngine) -> TextExtractor {
        TextExtractor::new(Arc::new(native), Arc::new(ocr))
    }

    #[tokio::test]
    async fn test_native_text_skips_ocr() {
        let mut native = MockNativeTextSource::new();
        native
            .expect_extract()
            .returning(|_| Ok("Invoice #123, Total: $50".to_string()));

        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize().times(0);

        let extraction = extractor(native, ocr)
            .extract(Path::new("docs/invoice.pdf"))
            .await;
        assert_eq!(extraction.text, "Invoice #123, Total: $50");
        assert_eq!(extraction.method, ExtractionMethod::Native);
        assert!(extraction.native_error.is_none());
        assert!(extraction.ocr_error.is_none());
    }

    #[tokio::test]
    async fn test_empty_native_text_triggers_ocr() {
        let mut native = MockNativeTextSource::new();
        native.expect_extract().returning(|_| Ok(String::new()));

        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize()
            .times(1)
            .returning(|_| Ok(OcrPass::complete("Contract Agreement between A and B\n")));

        let extraction = extractor(native, ocr)
            .extract(Path::new("docs/scan.pdf"))
            .await;
        assert_eq!(extraction.text, "Contract Agreement between A and B");
        assert_eq!(extraction.method, ExtractionMethod::Ocr);
    }

    #[tokio::test]
    async fn test_whitespace_only_native_text_triggers_ocr() {
        let mut native = MockNativeTextSource::new();
        native
            .expect_extract()
            .returning(|_| Ok("  \n\t ".to_string()));

        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize()
            .times(1)
            .returning(|_| Ok(OcrPass::complete("recognized")));

        let extraction = extractor(native, ocr)
            .extract(Path::new("docs/scan.pdf"))
            .await;
        assert_eq!(extraction.text, "recognized");
        assert_eq!(extraction.method, ExtractionMethod::Ocr);
    }

    #[tokio::test]
    async fn test_native_error_is_recorded_and_ocr_attempted() {
        let mut native = MockNativeTextSource::new();
        native
            .expect_extract()
            .returning(|_| Err(ExtractError::Pdf("broken xref".to_string())));

        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize()
            .times(1)
            .returning(|_| Ok(OcrPass::complete("ocr text")));

        let extraction = extractor(native, ocr)
            .extract(Path::new("docs/broken.pdf"))
            .await;
        assert_eq!(extraction.text, "ocr text");
        assert_eq!(extraction.method, ExtractionMethod::Ocr);
        assert!(extraction.native_error.unwrap().contains("broken xref"));
    }

    #[tokio::test]
    async fn test_partial_ocr_pass_keeps_text_and_records_error() {
        let mut native = MockNativeTextSource::new();
        native.expect_extract().returning(|_| Ok(String::new()));

        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize().returning(|_| {
            Ok(OcrPass::stopped(
                "PAGE ONE TEXT\n",
                "tesseract failed on page-2.png: boom",
            ))
        });

        let extraction = extractor(native, ocr)
            .extract(Path::new("docs/scan.pdf"))
            .await;
        assert_eq!(extraction.text, "PAGE ONE TEXT");
        assert_eq!(extraction.method, ExtractionMethod::Ocr);
        assert!(extraction.ocr_error.unwrap().contains("page-2.png"));
    }

    #[tokio::test]
    async fn test_both_stages_failing_yields_empty_extraction() {
        let mut native = MockNativeTextSource::new();
        native.expect_extract().returning(|_| Ok(String::new()));

        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize()
            .returning(|_| Err(ExtractError::Ocr("no tessdata".to_string())));

        let extraction = extractor(native, ocr)
            .extract(Path::new("docs/blank.pdf"))
            .await;
        assert!(extraction.is_empty());
        assert_eq!(extraction.method, ExtractionMethod::None);
        assert!(extraction.native_error.is_none());
        assert!(extraction.ocr_error.unwrap().contains("no tessdata"));
    }

    #[tokio::test]
    async fn test_result_is_trimmed() {
        let mut native = MockNativeTextSource::new();
        native
            .expect_extract()
            .returning(|_| Ok("\n  some text  \n".to_string()));

        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize().times(0);

        let extraction = extractor(native, ocr)
            .extract(Path::new("docs/doc.pdf"))
            .await;
        assert_eq!(extraction.text, "some text");
    }

    #[tokio::test]
    async fn test_extraction_is_repeatable() {
        let mut native = MockNativeTextSource::new();
        native
            .expect_extract()
            .times(2)
            .returning(|_| Ok("stable".to_string()));

        let mut ocr = MockOcrEngine::new();
        ocr.expect_recognize().times(0);

        let extractor = extractor(native, ocr);
        let first = extractor.extract(Path::new("docs/doc.pdf")).await;
        let second = extractor.extract(Path::new("docs/doc.pdf")).await;
        assert_eq!(first.text, second.text);
    }
}
