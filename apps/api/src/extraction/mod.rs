//! Text extraction: PDF bytes in, page texts out.
//!
//! Two backends sit behind `TextExtractor`: the embedded text layer
//! (`DirectTextExtractor`) and rasterize + OCR (`OcrTextExtractor`).
//! `FallbackExtractor` chains them. Callers that only want a string use
//! `extract_text`, which never fails: any error is logged and becomes "".

pub mod direct;
pub mod ocr;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use direct::DirectTextExtractor;
pub use ocr::{OcrSettings, OcrTextExtractor};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{tool} failed: {message}")]
    Tool { tool: String, message: String },

    #[error("Extraction timed out")]
    Timeout,
}

/// Synchronous and CPU/process bound; run it on the blocking pool.
pub trait TextExtractor: Send + Sync {
    /// Text of each page, in physical page order.
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractionError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    Direct,
    Ocr,
    DirectThenOcr,
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::Direct => "direct",
            ExtractionStrategy::Ocr => "ocr",
            ExtractionStrategy::DirectThenOcr => "direct_then_ocr",
        }
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" => Ok(ExtractionStrategy::Direct),
            "ocr" => Ok(ExtractionStrategy::Ocr),
            "direct_then_ocr" => Ok(ExtractionStrategy::DirectThenOcr),
            other => Err(format!(
                "unknown extraction strategy '{other}' (expected direct, ocr or direct_then_ocr)"
            )),
        }
    }
}

/// Tries `primary`; falls back to `secondary` when it errors or finds only
/// whitespace.
pub struct FallbackExtractor {
    primary: Arc<dyn TextExtractor>,
    secondary: Arc<dyn TextExtractor>,
}

impl FallbackExtractor {
    pub fn new(primary: Arc<dyn TextExtractor>, secondary: Arc<dyn TextExtractor>) -> Self {
        Self { primary, secondary }
    }
}

impl TextExtractor for FallbackExtractor {
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractionError> {
        match self.primary.extract_pages(pdf) {
            Ok(pages) if pages.iter().any(|p| !p.trim().is_empty()) => Ok(pages),
            Ok(_) => {
                debug!(
                    "{} extraction found no text, trying {}",
                    self.primary.name(),
                    self.secondary.name()
                );
                self.secondary.extract_pages(pdf)
            }
            Err(e) => {
                debug!(
                    "{} extraction failed ({e}), trying {}",
                    self.primary.name(),
                    self.secondary.name()
                );
                self.secondary.extract_pages(pdf)
            }
        }
    }

    fn name(&self) -> &'static str {
        "direct_then_ocr"
    }
}

pub fn build_extractor(strategy: ExtractionStrategy, ocr: OcrSettings) -> Arc<dyn TextExtractor> {
    match strategy {
        ExtractionStrategy::Direct => Arc::new(DirectTextExtractor),
        ExtractionStrategy::Ocr => Arc::new(OcrTextExtractor::new(ocr)),
        ExtractionStrategy::DirectThenOcr => Arc::new(FallbackExtractor::new(
            Arc::new(DirectTextExtractor),
            Arc::new(OcrTextExtractor::new(ocr)),
        )),
    }
}

/// Joined page text, or an empty string when extraction fails.
pub fn extract_text(extractor: &dyn TextExtractor, pdf: &[u8]) -> String {
    match extractor.extract_pages(pdf) {
        Ok(pages) => {
            debug!("{} extraction read {} pages", extractor.name(), pages.len());
            pages.join("\n")
        }
        Err(e) => {
            warn!("{} extraction failed: {e}", extractor.name());
            String::new()
        }
    }
}
