//! Environment-driven configuration for a batch run.

use std::path::PathBuf;

use tracing::warn;

use doctriage_core::traits::LlmConfig;
use doctriage_extractors::OcrConfig;

/// Full configuration for one batch run.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Folder scanned for `.pdf` files.
    pub docs_dir: PathBuf,
    /// External OCR tool settings.
    pub ocr: OcrConfig,
    /// Classification model settings.
    pub llm: LlmConfig,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            ocr: OcrConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl TriageConfig {
    /// Build configuration from `DOCTRIAGE_*` environment variables,
    /// falling back to defaults. The API key itself is read by the
    /// provider (`OPENAI_API_KEY`).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("DOCTRIAGE_DOCS_DIR") {
            config.docs_dir = PathBuf::from(dir);
        }
        if let Ok(model) = std::env::var("DOCTRIAGE_MODEL") {
            config.llm.model = model;
        }
        if let Ok(url) = std::env::var("DOCTRIAGE_BASE_URL") {
            config.llm.base_url = Some(url);
        }
        if let Ok(cmd) = std::env::var("DOCTRIAGE_TESSERACT_CMD") {
            config.ocr.tesseract_cmd = cmd;
        }
        if let Ok(cmd) = std::env::var("DOCTRIAGE_PDFTOPPM_CMD") {
            config.ocr.pdftoppm_cmd = cmd;
        }
        if let Ok(dir) = std::env::var("DOCTRIAGE_TESSDATA_DIR") {
            config.ocr.tessdata_dir = Some(PathBuf::from(dir));
        }
        if let Ok(lang) = std::env::var("DOCTRIAGE_OCR_LANG") {
            config.ocr.lang = lang;
        }
        if let Ok(dpi) = std::env::var("DOCTRIAGE_OCR_DPI") {
            match dpi.parse() {
                Ok(dpi) => config.ocr.dpi = dpi,
                Err(_) => warn!(value = %dpi, "ignoring invalid DOCTRIAGE_OCR_DPI"),
            }
        }

        config
    }
}
