// Résumé profile extraction: normalization, catalog matching, entity patterns and
// proficiency heuristics. Everything here is pure and synchronous; the only input
// besides the document text is the shared `SkillCatalog`.

pub mod catalog;
pub mod entities;
pub mod normalize;
pub mod proficiency;
pub mod sections;
pub mod skills;
pub mod summary;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::profile::catalog::SkillCatalog;
use crate::profile::entities::{
    extract_contact_info, extract_education, extract_experience, ContactInfo, ExperienceSummary,
};
use crate::profile::normalize::normalize_text;
use crate::profile::proficiency::score_proficiency;
use crate::profile::sections::{identify_sections, SectionKind};
use crate::profile::skills::{extract_skills, flatten_skills, SkillsByCategory};
use crate::recognizer::RecognizedEntity;

/// Structured result of analysing one résumé. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub contact_info: ContactInfo,
    pub education: Vec<String>,
    pub experience: ExperienceSummary,
    pub skills_by_category: SkillsByCategory,
    pub skill_proficiency: BTreeMap<String, u8>,
}

impl ExtractedProfile {
    /// Every found skill across categories.
    pub fn all_skills(&self) -> BTreeSet<String> {
        flatten_skills(&self.skills_by_category)
    }

    pub fn total_skills(&self) -> usize {
        self.all_skills().len()
    }
}

/// Runs every extractor over `raw` text. `entities` comes from the auxiliary
/// recognizer and is empty when none is configured.
pub fn build_profile(
    catalog: &SkillCatalog,
    raw: &str,
    entities: &[RecognizedEntity],
) -> ExtractedProfile {
    let normalized = normalize_text(raw);
    let sections = identify_sections(raw, catalog);
    let skills_section = sections.get(&SectionKind::Skills).map(|s| normalize_text(s));

    let skills_by_category =
        extract_skills(catalog, &normalized, skills_section.as_deref(), entities);
    let skill_proficiency = score_proficiency(&normalized, &flatten_skills(&skills_by_category));

    ExtractedProfile {
        contact_info: extract_contact_info(raw),
        education: extract_education(&normalized),
        experience: extract_experience(&normalized),
        skills_by_category,
        skill_proficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::catalog::SkillCategory;

    const RESUME: &str = "JANE DOE\n\
        jane.doe@example.com | (555) 123-4567 | linkedin.com/in/janedoe | github.com/jdoe\n\
        \n\
        SUMMARY\n\
        Senior Software Engineer with 6+ years of experience building data platforms.\n\
        \n\
        TECHNICAL SKILLS\n\
        Expert: Python, SQL. Intermediate: Kubernetes\n\
        \n\
        EDUCATION\n\
        Master of Science in Computer Science, Stanford University.\n";

    #[test]
    fn test_build_profile_end_to_end() {
        let catalog = SkillCatalog::builtin();
        let profile = build_profile(&catalog, RESUME, &[]);

        assert_eq!(profile.contact_info.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(profile.contact_info.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(profile.contact_info.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(profile.contact_info.github.as_deref(), Some("github.com/jdoe"));

        assert_eq!(profile.experience.total_years, 6);
        assert_eq!(profile.experience.job_titles, vec!["software engineer".to_string()]);

        assert_eq!(profile.education.len(), 1);
        assert!(profile.education[0].contains("master of science"));

        assert!(profile.skills_by_category[&SkillCategory::Programming].contains("python"));
        assert!(profile.skills_by_category[&SkillCategory::Databases].contains("sql"));
        assert!(profile.skills_by_category[&SkillCategory::Cloud].contains("kubernetes"));
        assert_eq!(profile.skill_proficiency["python"], 5);
    }

    #[test]
    fn test_proficiency_covers_every_found_skill() {
        let catalog = SkillCatalog::builtin();
        let profile = build_profile(&catalog, RESUME, &[]);
        let found = profile.all_skills();
        let scored: BTreeSet<String> = profile.skill_proficiency.keys().cloned().collect();
        assert_eq!(found, scored);
        assert_eq!(profile.total_skills(), found.len());
    }

    #[test]
    fn test_empty_text_yields_empty_profile() {
        let catalog = SkillCatalog::builtin();
        let profile = build_profile(&catalog, "", &[]);
        assert_eq!(profile.contact_info, ContactInfo::default());
        assert!(profile.education.is_empty());
        assert_eq!(profile.experience.total_years, 0);
        assert_eq!(profile.total_skills(), 0);
    }

    #[test]
    fn test_entities_enrich_profile() {
        let catalog = SkillCatalog::builtin();
        let entities = vec![RecognizedEntity {
            text: "Neo4j".to_string(),
            label: "PRODUCT".to_string(),
        }];
        let profile = build_profile(&catalog, "graph work", &entities);
        assert!(profile.skills_by_category[&SkillCategory::Databases].contains("neo4j"));
        assert_eq!(profile.skill_proficiency["neo4j"], 2);
    }
}
