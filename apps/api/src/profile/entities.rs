//! Entity Extractor: contact fields, education mentions, experience duration and
//! job titles, all driven by the declarative pattern tables below.
//!
//! Contact patterns run over raw text (emails and URLs keep their casing there);
//! everything else runs over normalized text.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::normalize::contains_word_prefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl ContactInfo {
    fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::LinkedIn => &mut self.linkedin,
            ContactField::GitHub => &mut self.github,
        };
        *slot = Some(value);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSummary {
    /// Largest "N years experience" figure found; 0 when none.
    pub total_years: u32,
    pub job_titles: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pattern tables
// ────────────────────────────────────────────────────────────────────────────

const CONTACT_PATTERNS: &[(ContactField, &str)] = &[
    (
        ContactField::Email,
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    ),
    (
        ContactField::Phone,
        r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    ),
    (ContactField::LinkedIn, r"(?i)linkedin\.com/in/[\w\-]+"),
    (ContactField::GitHub, r"(?i)github\.com/[\w\-]+"),
];

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "diploma", "certificate", "b.tech", "m.tech",
    "b.sc", "m.sc", "mba", "bba", "b.com", "m.com",
];

/// Group 1 is the number of years.
const EXPERIENCE_PATTERNS: &[&str] = &[
    r"(?i)(\d+)[+\s]*years?\s+(?:of\s+)?experience",
    r"(?i)experience[:\s]+(\d+)[+\s]*years?",
    r"(?i)(\d+)[+\s]*yrs?\s+(?:of\s+)?(?:exp|experience)\b",
];

const JOB_TITLE_PATTERNS: &[&str] = &[
    r"(?i)\b(?:software|senior|junior|lead|principal)\s+(?:developer|engineer|analyst|manager)\b",
    r"(?i)\b(?:data|business|product|project)\s+(?:scientist|analyst|manager)\b",
    r"(?i)\b(?:full stack|frontend|backend)\s+developer\b",
];

static CONTACT_REGEXES: Lazy<Vec<(ContactField, Regex)>> = Lazy::new(|| {
    CONTACT_PATTERNS
        .iter()
        .map(|(field, p)| (*field, Regex::new(p).expect("static contact pattern")))
        .collect()
});

static EXPERIENCE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(EXPERIENCE_PATTERNS));

static JOB_TITLE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(JOB_TITLE_PATTERNS));

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("static sentence pattern"));

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static entity pattern"))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// First match of each contact pattern in `raw`.
pub fn extract_contact_info(raw: &str) -> ContactInfo {
    let mut contact = ContactInfo::default();
    for (field, regex) in CONTACT_REGEXES.iter() {
        if let Some(m) = regex.find(raw) {
            contact.set(*field, m.as_str().to_string());
        }
    }
    contact
}

/// Every sentence that mentions a degree keyword, deduplicated.
pub fn extract_education(normalized: &str) -> Vec<String> {
    let mentions: BTreeSet<String> = split_sentences(normalized)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            DEGREE_KEYWORDS
                .iter()
                .any(|kw| contains_word_prefix(&lower, kw))
        })
        .map(str::to_string)
        .collect();
    mentions.into_iter().collect()
}

pub fn extract_experience(normalized: &str) -> ExperienceSummary {
    let total_years = EXPERIENCE_REGEXES
        .iter()
        .flat_map(|re| re.captures_iter(normalized))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    let job_titles: BTreeSet<String> = JOB_TITLE_REGEXES
        .iter()
        .flat_map(|re| re.find_iter(normalized))
        .map(|m| m.as_str().to_lowercase())
        .collect();

    ExperienceSummary {
        total_years,
        job_titles: job_titles.into_iter().collect(),
    }
}

/// Splits on terminal punctuation followed by whitespace (or end of text), so
/// abbreviations such as "b.sc" stay inside their sentence.
fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
