//! Raster + OCR stage using poppler's pdftoppm and tesseract.
//!
//! Both tools run as subprocesses so their executable locations and the
//! tesseract language-data directory stay injectable through [`OcrConfig`]
//! rather than living in process-wide state.

use std::path::{Path, PathBuf};
use std::process::Command;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::types::OcrPass;
use crate::OcrEngine;

/// External OCR tool configuration.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract executable, a name resolved on PATH or an absolute path.
    pub tesseract_cmd: String,
    /// pdftoppm executable from poppler-utils.
    pub pdftoppm_cmd: String,
    /// Tesseract language-data directory override (`--tessdata-dir`).
    pub tessdata_dir: Option<PathBuf>,
    /// Recognition language passed to tesseract.
    pub lang: String,
    /// Render resolution in dots per inch.
    pub dpi: u32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: "tesseract".to_string(),
            pdftoppm_cmd: "pdftoppm".to_string(),
            tessdata_dir: None,
            lang: "eng".to_string(),
            dpi: 300,
        }
    }
}

/// OCR engine rasterizing pages with pdftoppm and recognizing each page
/// image with tesseract.
pub struct TesseractEngine {
    config: OcrConfig,
}

impl TesseractEngine {
    /// Create an engine with the given tool configuration.
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    /// Check that both external tools can be spawned.
    pub fn is_available(&self) -> bool {
        let raster = Command::new(&self.config.pdftoppm_cmd)
            .arg("-v")
            .output()
            .is_ok();
        let ocr = Command::new(&self.config.tesseract_cmd)
            .arg("--version")
            .output()
            .is_ok();
        raster && ocr
    }

    fn recognize_blocking(config: &OcrConfig, path: &Path) -> ExtractResult<OcrPass> {
        let temp_dir = tempfile::tempdir()?;
        let prefix = temp_dir.path().join("page");

        let output = Command::new(&config.pdftoppm_cmd)
            .arg("-png")
            .arg("-r")
            .arg(config.dpi.to_string())
            .arg(path)
            .arg(&prefix)
            .output()
            .map_err(|e| {
                ExtractError::Raster(format!("failed to run {}: {}", config.pdftoppm_cmd, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Raster(format!(
                "{} failed: {}",
                config.pdftoppm_cmd,
                stderr.trim()
            )));
        }

        // pdftoppm writes page-1.png, page-2.png, ... zero-padding the
        // page number, so a lexical sort restores page order.
        let mut pages: Vec<PathBuf> = std::fs::read_dir(temp_dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
            .collect();
        pages.sort();

        debug!(pages = pages.len(), "rasterized document, running OCR");

        // A failing page ends the pass; pages recognized before it stay
        // in the accumulated text.
        let mut text = String::new();
        for page in &pages {
            match Self::ocr_page(config, page) {
                Ok(recognized) => text.push_str(&recognized),
                Err(e) => return Ok(OcrPass::stopped(text, e.to_string())),
            }
        }

        Ok(OcrPass::complete(text))
    }

    fn ocr_page(config: &OcrConfig, image: &Path) -> ExtractResult<String> {
        let mut cmd = Command::new(&config.tesseract_cmd);
        cmd.arg(image).arg("stdout").arg("-l").arg(&config.lang);
        if let Some(ref tessdata) = config.tessdata_dir {
            cmd.arg("--tessdata-dir").arg(tessdata);
        }

        let output = cmd.output().map_err(|e| {
            ExtractError::Ocr(format!("failed to run {}: {}", config.tesseract_cmd, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Ocr(format!(
                "{} failed on {}: {}",
                config.tesseract_cmd,
                image.display(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, path: &Path) -> ExtractResult<OcrPass> {
        let config = self.config.clone();
        let path = path.to_path_buf();

        tokio::task::spawn_blocking(move || Self::recognize_blocking(&config, &path)).await?
    }
}
