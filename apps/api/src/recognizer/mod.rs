//! Entity Recognizer: optional enrichment source for the skill extractor.
//!
//! The pipeline always holds an `Arc<dyn EntityRecognizer>`. When no recognizer
//! service is configured it is a `NullRecognizer`, which finds nothing, so the
//! extraction path is identical either way.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use http::HttpEntityRecognizer;

/// Entity labels that may name a skill (spaCy-style label names).
const SKILL_CANDIDATE_LABELS: &[&str] = &["ORG", "PRODUCT", "LANGUAGE"];

/// One (text, type) pair returned by a recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    pub text: String,
    pub label: String,
}

impl RecognizedEntity {
    pub fn is_skill_candidate(&self) -> bool {
        SKILL_CANDIDATE_LABELS
            .iter()
            .any(|l| l.eq_ignore_ascii_case(self.label.trim()))
    }
}

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Recognizer returned status {status}: {message}")]
    Status { status: u16, message: String },
}

#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Recognizes entities in normalized text.
    async fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognizerError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Used whenever no recognizer is available. Always returns no entities.
pub struct NullRecognizer;

#[async_trait]
impl EntityRecognizer for NullRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Vec<RecognizedEntity>, RecognizerError> {
        Ok(Vec::new())
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}
