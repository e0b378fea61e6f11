use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::catalog::SkillCategory;
use crate::profile::ExtractedProfile;

const TOP_SKILLS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSkill {
    pub skill: String,
    pub proficiency: u8,
}

/// Condensed view of a profile's skills for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsSummary {
    pub total_skills: usize,
    /// Only categories with at least one skill.
    pub skills_by_category: BTreeMap<SkillCategory, usize>,
    /// Highest proficiency first, ties alphabetical.
    pub top_skills: Vec<RankedSkill>,
}

pub fn summarize_skills(profile: &ExtractedProfile) -> SkillsSummary {
    let skills_by_category = profile
        .skills_by_category
        .iter()
        .filter(|(_, skills)| !skills.is_empty())
        .map(|(category, skills)| (*category, skills.len()))
        .collect();

    let mut ranked: Vec<RankedSkill> = profile
        .skill_proficiency
        .iter()
        .map(|(skill, level)| RankedSkill {
            skill: skill.clone(),
            proficiency: *level,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.proficiency
            .cmp(&a.proficiency)
            .then_with(|| a.skill.cmp(&b.skill))
    });
    ranked.truncate(TOP_SKILLS);

    SkillsSummary {
        total_skills: profile.total_skills(),
        skills_by_category,
        top_skills: ranked,
    }
}
