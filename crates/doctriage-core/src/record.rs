//! Per-document output records.
//!
//! One record is emitted per discovered PDF, as a single JSON line. The
//! field names (`fecha`, `documento`, `resultado`) are the established
//! wire contract and are kept as-is.

use serde::Serialize;

/// Classification record for one processed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputRecord {
    /// Successful classification.
    Classified {
        /// Processing timestamp, `%Y-%m-%d %H:%M:%S`.
        fecha: String,
        /// File basename.
        documento: String,
        /// Raw model response, expected (not verified) to be JSON.
        resultado: String,
    },
    /// The document could not be processed.
    Failed {
        /// Human-readable failure description.
        error: String,
    },
}

impl OutputRecord {
    /// Create a success record.
    pub fn classified(
        fecha: impl Into<String>,
        documento: impl Into<String>,
        resultado: impl Into<String>,
    ) -> Self {
        Self::Classified {
            fecha: fecha.into(),
            documento: documento.into(),
            resultado: resultado.into(),
        }
    }

    /// Create a failure record.
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Whether this record represents a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_wire_shape() {
        let record = OutputRecord::classified(
            "2024-01-15 10:30:00",
            "invoice.pdf",
            r#"{"clasificacion": "Factura"}"#,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with(r#"{"fecha":"2024-01-15 10:30:00","documento":"invoice.pdf""#));
        assert!(!record.is_failed());
    }

    #[test]
    fn test_failed_wire_shape() {
        let record = OutputRecord::failed("could not extract text from docs/blank.pdf");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"error":"could not extract text from docs/blank.pdf"}"#
        );
        assert!(record.is_failed());
    }
}
