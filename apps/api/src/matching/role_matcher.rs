//! Role matching: compares found skills with a role's required skills.
//!
//! Carried in `Analyzer` as `Arc<dyn RoleMatcher>` so alternative scoring
//! strategies can be swapped in without touching the pipeline.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// Outcome of matching one profile against one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Required skills that were found, in required-list order and casing.
    pub matched_skills: Vec<String>,
    /// Required skills that were not found, in required-list order.
    pub missing_skills: Vec<String>,
    /// 0.0 – 100.0, full precision. 0.0 when the role requires nothing.
    pub match_percentage: f64,
    /// The role's required-skill list as given.
    pub job_skills: Vec<String>,
}

impl MatchResult {
    /// Percentage truncated (not rounded) to one decimal place, for display.
    pub fn display_percentage(&self) -> f64 {
        (self.match_percentage * 10.0).trunc() / 10.0
    }
}

pub trait RoleMatcher: Send + Sync {
    fn match_role(&self, found: &BTreeSet<String>, required: &[String]) -> MatchResult;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Case-insensitive set intersection between found skills and requirements.
pub struct KeywordRoleMatcher;

impl RoleMatcher for KeywordRoleMatcher {
    fn match_role(&self, found: &BTreeSet<String>, required: &[String]) -> MatchResult {
        compute_match(found, required)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

fn compute_match(found: &BTreeSet<String>, required: &[String]) -> MatchResult {
    let found_lower: HashSet<String> = found.iter().map(|s| s.to_lowercase()).collect();

    // a requirement listed twice counts once
    let mut seen = HashSet::new();
    let distinct: Vec<&String> = required
        .iter()
        .filter(|r| seen.insert(r.to_lowercase()))
        .collect();

    let (matched, missing): (Vec<&String>, Vec<&String>) = distinct
        .iter()
        .partition(|r| found_lower.contains(&r.to_lowercase()));

    let match_percentage = if distinct.is_empty() {
        0.0
    } else {
        100.0 * matched.len() as f64 / distinct.len() as f64
    };

    MatchResult {
        matched_skills: matched.into_iter().cloned().collect(),
        missing_skills: missing.into_iter().cloned().collect(),
        match_percentage,
        job_skills: required.to_vec(),
    }
}
