//! Skill Extractor: catalog matching over normalized text.
//!
//! Three passes, merged by set union:
//! 1. keyword pass over the whole document
//! 2. keyword pass over the "skills" section alone
//! 3. recognized entities (organization / product / language) against catalog terms
//!
//! Pass 3 only ever sees whatever the injected recognizer returned; with the no-op
//! recognizer it contributes nothing.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::profile::catalog::{SkillCatalog, SkillCategory};
use crate::profile::normalize::contains_term;
use crate::recognizer::RecognizedEntity;

pub type SkillsByCategory = BTreeMap<SkillCategory, BTreeSet<String>>;

/// Runs all three passes. Every category is present in the result, possibly empty.
pub fn extract_skills(
    catalog: &SkillCatalog,
    normalized: &str,
    skills_section: Option<&str>,
    entities: &[RecognizedEntity],
) -> SkillsByCategory {
    let mut found: SkillsByCategory = SkillCategory::ALL
        .iter()
        .map(|c| (*c, BTreeSet::new()))
        .collect();

    keyword_pass(catalog, normalized, &mut found);

    if let Some(section) = skills_section {
        let before = count(&found);
        keyword_pass(catalog, section, &mut found);
        debug!("Skills section pass added {} terms", count(&found) - before);
    }

    if !entities.is_empty() {
        let before = count(&found);
        entity_pass(catalog, entities, &mut found);
        debug!(
            "Entity pass over {} entities added {} terms",
            entities.len(),
            count(&found) - before
        );
    }

    found
}

/// Flattened, deduplicated skill set across all categories.
pub fn flatten_skills(skills: &SkillsByCategory) -> BTreeSet<String> {
    skills.values().flatten().cloned().collect()
}

fn keyword_pass(catalog: &SkillCatalog, text: &str, found: &mut SkillsByCategory) {
    for (category, term) in catalog.entries() {
        if contains_term(text, term) {
            found.entry(category).or_default().insert(term.to_string());
        }
    }
}

/// An entity hits a term when either contains the other. Only the term-inside-entity
/// direction is word-bounded (so the term "r" does not hit "Microsoft"). The
/// entity-inside-term direction is a plain substring test: an entity "Go" hits
/// "django", "mongodb" and "google cloud" as well as "go".
fn entity_pass(catalog: &SkillCatalog, entities: &[RecognizedEntity], found: &mut SkillsByCategory) {
    for entity in entities.iter().filter(|e| e.is_skill_candidate()) {
        let entity_text = entity.text.trim().to_lowercase();
        if entity_text.is_empty() {
            continue;
        }
        for (category, term) in catalog.entries() {
            if contains_term(&entity_text, term) || term.contains(entity_text.as_str()) {
                found.entry(category).or_default().insert(term.to_string());
            }
        }
    }
}

fn count(found: &SkillsByCategory) -> usize {
    found.values().map(BTreeSet::len).sum()
}
