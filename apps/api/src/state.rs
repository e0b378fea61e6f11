use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::profile::catalog::SkillCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Same catalog the analyzer matches against.
    pub catalog: Arc<SkillCatalog>,
    pub analyzer: Arc<Analyzer>,
}
