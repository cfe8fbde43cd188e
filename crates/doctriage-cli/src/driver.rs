//! Sequential batch driver: scan a folder, process each PDF, print one
//! JSON record per document to stdout.

use std::path::Path;

use chrono::Local;
use tracing::{info, warn};

use doctriage_core::record::OutputRecord;
use doctriage_extractors::TextExtractor;
use doctriage_llm::Classifier;

/// Timestamp format used in the `fecha` field.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Drives the per-document pipeline over a folder of PDFs, strictly one
/// document at a time.
pub struct BatchDriver {
    extractor: TextExtractor,
    classifier: Classifier,
}

impl BatchDriver {
    /// Create a driver over the extraction and classification stages.
    pub fn new(extractor: TextExtractor, classifier: Classifier) -> Self {
        Self {
            extractor,
            classifier,
        }
    }

    /// Process a single PDF into its output record.
    ///
    /// An empty extraction short-circuits to an error record without
    /// calling the classifier. A failed remote call degrades to an error
    /// record the same way, so one document cannot abort the batch.
    pub async fn process_document(&self, path: &Path) -> OutputRecord {
        let extraction = self.extractor.extract(path).await;
        if extraction.is_empty() {
            return OutputRecord::failed(format!(
                "could not extract text from {}",
                path.display()
            ));
        }

        match self.classifier.classify(&extraction.text).await {
            Ok(resultado) => OutputRecord::classified(
                Local::now().format(TIMESTAMP_FORMAT).to_string(),
                basename(path),
                resultado,
            ),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "classification failed");
                OutputRecord::failed(format!(
                    "classification failed for {}: {}",
                    path.display(),
                    e
                ))
            }
        }
    }

    /// Process every `.pdf` file in `folder`, printing one JSON line per
    /// document. Returns the number of documents processed.
    ///
    /// Files are taken in directory-listing order; the `.pdf` suffix
    /// match is case-sensitive and subdirectories are not entered. A
    /// missing folder logs a warning and processes nothing.
    pub async fn run(&self, folder: &Path) -> anyhow::Result<usize> {
        if !folder.exists() {
            warn!(
                folder = %folder.display(),
                "input folder not found; create it and place PDFs there"
            );
            return Ok(0);
        }

        let mut processed = 0;
        for entry in std::fs::read_dir(folder)? {
            let path = entry?.path();
            if !is_pdf_file(&path) {
                continue;
            }

            let record = self.process_document(&path).await;
            println!("{}", serde_json::to_string(&record)?);
            processed += 1;
        }

        info!(processed, "batch run finished");
        Ok(processed)
    }
}

fn is_pdf_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".pdf"))
            .unwrap_or(false)
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pdf_suffix_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.pdf", "REPORT.PDF", "notes.txt", "archive.pdf.bak"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }

        assert!(is_pdf_file(&dir.path().join("a.pdf")));
        assert!(!is_pdf_file(&dir.path().join("REPORT.PDF")));
        assert!(!is_pdf_file(&dir.path().join("notes.txt")));
        assert!(!is_pdf_file(&dir.path().join("archive.pdf.bak")));
    }

    #[test]
    fn test_directories_are_not_pdf_files() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("folder.pdf");
        std::fs::create_dir(&sub).unwrap();
        assert!(!is_pdf_file(&sub));
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename(&PathBuf::from("docs/invoice.pdf")), "invoice.pdf");
        assert_eq!(basename(&PathBuf::from("invoice.pdf")), "invoice.pdf");
    }
}
