use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::financial::ExtractedFinancials;

/// Core trait that all extraction engines implement
pub trait Extractor {
    /// Run one extraction over the input document
    fn extract(&self, input: &ExtractionInput) -> Result<ExtractedFinancials, ExtractionError>;

    /// What extraction method does this extractor use?
    fn method(&self) -> ExtractionMethod;

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types. Extraction itself degrades to safe defaults on
/// malformed text; these cover configuration and caller-level misuse only.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Extraction methods available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    PatternBased,
}

/// Input provided to extractors. The engine consumes only `text`; the
/// identifiers ride along for provenance in the calling layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ExtractionInput {
    pub document_id: String,
    pub filename: Option<String>,
    /// Plain document text, already decoded by the ingestion pipeline
    pub text: String,
}
