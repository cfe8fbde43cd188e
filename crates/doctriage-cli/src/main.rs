//! doctriage - bulk PDF triage binary.
//!
//! Reads every `.pdf` in the input folder, extracts its text (embedded
//! text first, raster+OCR fallback), classifies it with an LLM, and
//! prints one JSON record per document to stdout. Diagnostics go to
//! stderr so stdout stays a clean JSON-lines stream.
//!
//! # Configuration
//!
//! Environment variables (a `.env` file is honored):
//!
//! - `OPENAI_API_KEY` - required for classification
//! - `DOCTRIAGE_DOCS_DIR` - input folder, defaults to `docs`
//! - `DOCTRIAGE_MODEL` - chat model, defaults to `gpt-4o`
//! - `DOCTRIAGE_BASE_URL` - API base URL override (compatible endpoints)
//! - `DOCTRIAGE_TESSERACT_CMD` / `DOCTRIAGE_PDFTOPPM_CMD` - OCR tool
//!   executables, resolved on PATH by default
//! - `DOCTRIAGE_TESSDATA_DIR` - tesseract language-data directory
//! - `DOCTRIAGE_OCR_LANG` / `DOCTRIAGE_OCR_DPI` - recognition settings

use std::sync::Arc;

use anyhow::Result;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use doctriage_cli::{BatchDriver, TriageConfig};
use doctriage_core::traits::Llm;
use doctriage_extractors::{PdfTextSource, TesseractEngine, TextExtractor};
use doctriage_llm::{Classifier, OpenAiProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Log to stderr; stdout carries the JSON records.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = TriageConfig::from_env();

    let ocr = TesseractEngine::new(config.ocr.clone());
    if !ocr.is_available() {
        warn!("pdftoppm/tesseract not found; PDFs without embedded text will fail extraction");
    }
    let extractor = TextExtractor::new(Arc::new(PdfTextSource::new()), Arc::new(ocr));

    let llm: Arc<dyn Llm> = Arc::new(OpenAiProvider::new(config.llm.clone())?);
    let classifier = Classifier::new(llm);

    let driver = BatchDriver::new(extractor, classifier);
    driver.run(&config.docs_dir).await?;

    Ok(())
}
