//! Skill Catalog: the categorized reference list of known skill terms plus the
//! required-skill list for every supported job role.
//!
//! Built once at startup (`SkillCatalog::builtin()` or `from_json_file`) and shared
//! read-only as `Arc<SkillCatalog>`.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// The eight fixed skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    WebDevelopment,
    DataScience,
    Databases,
    Cloud,
    Tools,
    Business,
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 8] = [
        SkillCategory::Programming,
        SkillCategory::WebDevelopment,
        SkillCategory::DataScience,
        SkillCategory::Databases,
        SkillCategory::Cloud,
        SkillCategory::Tools,
        SkillCategory::Business,
        SkillCategory::SoftSkills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::WebDevelopment => "web_development",
            SkillCategory::DataScience => "data_science",
            SkillCategory::Databases => "databases",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Tools => "tools",
            SkillCategory::Business => "business",
            SkillCategory::SoftSkills => "soft_skills",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named job role and the skills it requires, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    pub required_skills: Vec<String>,
}

/// Immutable skill reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    categories: BTreeMap<SkillCategory, Vec<String>>,
    roles: Vec<RoleProfile>,
}

const PROGRAMMING: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust", "swift", "kotlin",
    "scala", "r", "matlab", "perl", "shell", "bash", "powershell",
];

const WEB_DEVELOPMENT: &[&str] = &[
    "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask", "spring",
    "laravel", "bootstrap", "jquery", "webpack", "sass", "less",
];

const DATA_SCIENCE: &[&str] = &[
    "machine learning", "deep learning", "neural networks", "tensorflow", "pytorch", "keras",
    "scikit-learn", "pandas", "numpy", "matplotlib", "seaborn", "plotly", "tableau", "power bi",
    "statistics", "data mining", "nlp", "computer vision",
];

const DATABASES: &[&str] = &[
    "sql", "mysql", "postgresql", "mongodb", "redis", "cassandra", "oracle", "sqlite", "nosql",
    "elasticsearch", "neo4j",
];

const CLOUD: &[&str] = &[
    "aws", "azure", "google cloud", "docker", "kubernetes", "jenkins", "terraform", "ansible",
    "cloudformation", "lambda", "ec2", "s3", "rds",
];

const TOOLS: &[&str] = &[
    "git", "github", "gitlab", "bitbucket", "jira", "confluence", "slack", "trello", "figma",
    "sketch", "photoshop", "illustrator", "postman", "swagger",
];

const BUSINESS: &[&str] = &[
    "project management", "agile", "scrum", "kanban", "business analysis", "product management",
    "stakeholder management", "requirements gathering", "process improvement",
    "strategic planning",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "analytical thinking",
    "creativity", "adaptability", "time management", "critical thinking", "collaboration",
];

const ROLES: &[(&str, &[&str])] = &[
    ("Data Scientist", &["Python", "Machine Learning", "Statistics", "SQL", "Pandas"]),
    ("ML Engineer", &["Python", "TensorFlow", "PyTorch", "Machine Learning", "Docker"]),
    ("Software Developer", &["Java", "C++", "Git", "Agile", "SQL"]),
    ("Business Analyst", &["Excel", "PowerPoint", "SQL", "Communication", "Problem Solving"]),
    ("Product Manager", &["Roadmapping", "Agile", "Communication", "Leadership", "Analytics"]),
    ("DevOps Engineer", &["Docker", "Kubernetes", "AWS", "CI/CD", "Linux"]),
    ("Frontend Developer", &["JavaScript", "React", "CSS", "HTML", "Git"]),
    ("Backend Developer", &["Python", "Django", "APIs", "SQL", "Docker"]),
    ("Full Stack Developer", &["JavaScript", "React", "Node.js", "SQL", "Git"]),
    ("Data Analyst", &["Excel", "SQL", "Tableau", "Python", "Statistics"]),
];

impl SkillCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        let tables: [(SkillCategory, &[&str]); 8] = [
            (SkillCategory::Programming, PROGRAMMING),
            (SkillCategory::WebDevelopment, WEB_DEVELOPMENT),
            (SkillCategory::DataScience, DATA_SCIENCE),
            (SkillCategory::Databases, DATABASES),
            (SkillCategory::Cloud, CLOUD),
            (SkillCategory::Tools, TOOLS),
            (SkillCategory::Business, BUSINESS),
            (SkillCategory::SoftSkills, SOFT_SKILLS),
        ];

        let categories = tables
            .iter()
            .map(|(category, terms)| (*category, terms.iter().map(|t| t.to_string()).collect()))
            .collect();

        let roles = ROLES
            .iter()
            .map(|(name, skills)| RoleProfile {
                name: name.to_string(),
                required_skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();

        Self { categories, roles }
    }

    /// Loads a catalog from a JSON file shaped like the serialized `SkillCatalog`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill catalog '{}'", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid skill catalog '{}'", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let parsed: SkillCatalog = serde_json::from_str(raw)?;
        parsed.canonicalized()
    }

    /// Lowercases, trims and deduplicates terms; rejects empty terms and role names.
    fn canonicalized(self) -> Result<Self> {
        let mut categories = BTreeMap::new();
        for (category, terms) in self.categories {
            let mut seen = HashSet::new();
            let mut canonical = Vec::with_capacity(terms.len());
            for term in terms {
                let term = term.trim().to_lowercase();
                if term.is_empty() {
                    bail!("category '{category}' contains an empty term");
                }
                if seen.insert(term.clone()) {
                    canonical.push(term);
                }
            }
            categories.insert(category, canonical);
        }

        for role in &self.roles {
            if role.name.trim().is_empty() {
                bail!("role with empty name");
            }
        }

        Ok(Self {
            categories,
            roles: self.roles,
        })
    }

    /// Every (category, term) pair in category order.
    pub fn entries(&self) -> impl Iterator<Item = (SkillCategory, &str)> + '_ {
        self.categories
            .iter()
            .flat_map(|(category, terms)| terms.iter().map(move |t| (*category, t.as_str())))
    }

    pub fn terms(&self, category: SkillCategory) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> &BTreeMap<SkillCategory, Vec<String>> {
        &self.categories
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    /// Required skills for `role` (case-insensitive name). Unknown roles have none.
    pub fn required_skills(&self, role: &str) -> &[String] {
        let role = role.trim();
        self.roles
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(role))
            .map(|r| r.required_skills.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_all_eight_categories() {
        let catalog = SkillCatalog::builtin();
        for category in SkillCategory::ALL {
            assert!(
                !catalog.terms(category).is_empty(),
                "category {category} is empty"
            );
        }
    }

    #[test]
    fn test_builtin_terms_are_lowercase() {
        let catalog = SkillCatalog::builtin();
        for (_, term) in catalog.entries() {
            assert_eq!(term, term.to_lowercase());
        }
    }

    #[test]
    fn test_required_skills_case_insensitive_lookup() {
        let catalog = SkillCatalog::builtin();
        let skills = catalog.required_skills("data scientist");
        assert_eq!(skills.len(), 5);
        assert_eq!(skills[0], "Python");
    }

    #[test]
    fn test_unknown_role_has_no_required_skills() {
        let catalog = SkillCatalog::builtin();
        assert!(catalog.required_skills("Astronaut").is_empty());
        assert!(catalog.required_skills("Select").is_empty());
        assert!(catalog.required_skills("").is_empty());
    }

    #[test]
    fn test_from_json_canonicalizes_terms() {
        let json = r#"{
            "categories": {
                "programming": ["Python", " python ", "Rust"],
                "soft_skills": ["Leadership"]
            },
            "roles": [
                {"name": "Systems Engineer", "required_skills": ["Rust", "Leadership"]}
            ]
        }"#;
        let catalog = SkillCatalog::from_json_str(json).unwrap();
        assert_eq!(
            catalog.terms(SkillCategory::Programming),
            &["python".to_string(), "rust".to_string()]
        );
        assert!(catalog.terms(SkillCategory::Cloud).is_empty());
        assert_eq!(catalog.required_skills("systems engineer").len(), 2);
    }

    #[test]
    fn test_from_json_rejects_empty_term() {
        let json = r#"{"categories": {"tools": ["git", "  "]}, "roles": []}"#;
        assert!(SkillCatalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&SkillCategory::WebDevelopment).unwrap();
        assert_eq!(json, r#""web_development""#);
        assert_eq!(SkillCategory::SoftSkills.to_string(), "soft_skills");
    }
}
