//! Native PDF text extraction using pdf-extract.

use std::path::Path;

use async_trait::async_trait;

use crate::error::{ExtractError, ExtractResult};
use crate::NativeTextSource;

/// Embedded-text extractor backed by the pdf-extract library.
///
/// pdf-extract walks the content streams page by page and concatenates
/// the text it finds; pages without a text layer contribute nothing. The
/// synchronous parse runs in spawn_blocking to avoid blocking the async
/// runtime.
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource;

impl PdfTextSource {
    /// Create a new native text source.
    pub fn new() -> Self {
        PdfTextSource
    }
}

#[async_trait]
impl NativeTextSource for PdfTextSource {
    async fn extract(&self, path: &Path) -> ExtractResult<String> {
        let bytes = tokio::fs::read(path).await?;

        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| ExtractError::Pdf(e.to_string()))
        })
        .await??;

        Ok(text)
    }
}
