use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::extraction::{extract_text, ExtractionError, TextExtractor};
use crate::matching::{generate_suggestions, MatchResult, RoleMatcher};
use crate::profile::build_profile;
use crate::profile::catalog::SkillCatalog;
use crate::profile::normalize::normalize_text;
use crate::profile::summary::{summarize_skills, SkillsSummary};
use crate::profile::ExtractedProfile;
use crate::recognizer::{EntityRecognizer, RecognizedEntity};

/// An uploaded document, held in memory for the whole analysis.
#[derive(Debug, Clone)]
pub struct Document {
    pub bytes: Bytes,
    pub filename: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No text could be extracted from the document")]
    NoText,
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub filename: Option<String>,
    pub role: String,
    pub profile: ExtractedProfile,
    pub all_skills: Vec<String>,
    pub match_result: MatchResult,
    pub suggestions: Vec<String>,
    pub summary: SkillsSummary,
}

/// Runs the document → profile → match → suggestions pipeline.
///
/// Holds only shared, read-only collaborators, so one instance serves every
/// request concurrently.
pub struct Analyzer {
    catalog: Arc<SkillCatalog>,
    extractor: Arc<dyn TextExtractor>,
    recognizer: Arc<dyn EntityRecognizer>,
    matcher: Arc<dyn RoleMatcher>,
    extraction_timeout: Duration,
}

impl Analyzer {
    pub fn new(
        catalog: Arc<SkillCatalog>,
        extractor: Arc<dyn TextExtractor>,
        recognizer: Arc<dyn EntityRecognizer>,
        matcher: Arc<dyn RoleMatcher>,
        extraction_timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            extractor,
            recognizer,
            matcher,
            extraction_timeout,
        }
    }

    /// Analyzes `document` against `role`. Unknown roles are not an error: they
    /// have no requirements and score 0%.
    ///
    /// Returns `AnalysisError::NoText` when nothing readable comes out of the
    /// document; the matcher is not consulted in that case.
    pub async fn analyze(
        &self,
        document: Document,
        role: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let analysis_id = Uuid::new_v4();

        let text = match self.extract(&document).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Analysis {analysis_id}: {e}");
                String::new()
            }
        };
        if text.trim().is_empty() {
            warn!("Analysis {analysis_id}: no extractable text");
            return Err(AnalysisError::NoText);
        }

        let entities = self.recognize(&text).await;
        let profile = build_profile(&self.catalog, &text, &entities);
        let found = profile.all_skills();

        let required = self.catalog.required_skills(role);
        let match_result = self.matcher.match_role(&found, required);
        let suggestions = generate_suggestions(&match_result, role);
        let summary = summarize_skills(&profile);

        info!(
            "Analysis {analysis_id}: role='{}' skills={} match={:.1}% ({})",
            role.trim(),
            found.len(),
            match_result.display_percentage(),
            self.matcher.backend()
        );

        Ok(AnalysisReport {
            analysis_id,
            analyzed_at: Utc::now(),
            filename: document.filename,
            role: role.trim().to_string(),
            profile,
            all_skills: found.into_iter().collect(),
            match_result,
            suggestions,
            summary,
        })
    }

    /// Extraction on the blocking pool under a timeout. Extractor errors are
    /// already folded into an empty string by `extract_text`; what remains is a
    /// timeout or a panicking parser.
    async fn extract(&self, document: &Document) -> Result<String, ExtractionError> {
        if document.bytes.is_empty() {
            return Ok(String::new());
        }

        let extractor = Arc::clone(&self.extractor);
        let bytes = document.bytes.clone();
        let task = tokio::task::spawn_blocking(move || extract_text(extractor.as_ref(), &bytes));

        match tokio::time::timeout(self.extraction_timeout, task).await {
            Ok(Ok(text)) => {
                debug!(
                    "Extracted {} chars with {}",
                    text.len(),
                    self.extractor.name()
                );
                Ok(text)
            }
            Ok(Err(e)) => Err(ExtractionError::Pdf(format!("extraction task aborted: {e}"))),
            Err(_) => Err(ExtractionError::Timeout),
        }
    }

    async fn recognize(&self, text: &str) -> Vec<RecognizedEntity> {
        match self.recognizer.recognize(&normalize_text(text)).await {
            Ok(entities) => entities,
            Err(e) => {
                info!(
                    "Entity recognizer ({}) unavailable, skipping enrichment: {e}",
                    self.recognizer.backend()
                );
                Vec::new()
            }
        }
    }
}
