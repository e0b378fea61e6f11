//! Résumé section segmentation over raw (layout-preserving) text.
//!
//! A section starts at a heading line: the bare heading phrase, or the phrase
//! followed by `:` and inline content. It runs until the next heading-like line
//! (a bare known heading, or an all-caps line naming no catalog skill) or the
//! end of the document.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::catalog::SkillCatalog;
use crate::profile::normalize::{contains_term, normalize_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
}

/// Heading pattern per section. Group 1 captures content after a `:`.
const HEADING_PATTERNS: &[(SectionKind, &str)] = &[
    (
        SectionKind::Skills,
        r"(?i)^(?:technical\s+)?skills?(?:\s+(?:and|&)\s+(?:technologies|expertise))?\s*(?::\s*(.*))?$",
    ),
    (
        SectionKind::Experience,
        r"(?i)^(?:work\s+|professional\s+)?experience\s*(?::\s*(.*))?$",
    ),
    (SectionKind::Education, r"(?i)^education\s*(?::\s*(.*))?$"),
    (SectionKind::Projects, r"(?i)^projects?\s*(?::\s*(.*))?$"),
    (
        SectionKind::Certifications,
        r"(?i)^certifications?\s*(?::\s*(.*))?$",
    ),
];

static HEADINGS: Lazy<Vec<(SectionKind, Regex)>> = Lazy::new(|| {
    HEADING_PATTERNS
        .iter()
        .map(|(kind, pattern)| (*kind, Regex::new(pattern).expect("static heading pattern")))
        .collect()
});

static ALL_CAPS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z\s&/]{3,}:?$").expect("static all-caps pattern"));

pub type Sections = BTreeMap<SectionKind, String>;

/// Splits `raw` into the known sections. Only the first occurrence of each
/// heading is used; absent sections are simply missing from the map.
///
/// `catalog` keeps all-caps skill lines such as "HTML CSS" inside their section.
pub fn identify_sections(raw: &str, catalog: &SkillCatalog) -> Sections {
    let lines: Vec<&str> = raw.lines().map(str::trim).collect();
    let mut sections = Sections::new();

    for (kind, heading) in HEADINGS.iter() {
        let Some((start, inline)) = lines.iter().enumerate().find_map(|(i, &line)| {
            heading
                .captures(line)
                .map(|caps| (i, caps.get(1).map_or("", |m| m.as_str())))
        }) else {
            continue;
        };

        let mut body: Vec<&str> = Vec::new();
        if !inline.is_empty() {
            body.push(inline);
        }
        for &line in &lines[start + 1..] {
            if is_heading_like(line, catalog) {
                break;
            }
            if !line.is_empty() {
                body.push(line);
            }
        }

        sections.insert(*kind, body.join("\n"));
    }

    sections
}

fn is_heading_like(line: &str, catalog: &SkillCatalog) -> bool {
    let bare_heading = HEADINGS.iter().any(|(_, heading)| {
        heading
            .captures(line)
            .is_some_and(|caps| caps.get(1).map_or(true, |m| m.as_str().is_empty()))
    });
    if bare_heading {
        return true;
    }
    ALL_CAPS_HEADING.is_match(line) && !names_catalog_term(line, catalog)
}

fn names_catalog_term(line: &str, catalog: &SkillCatalog) -> bool {
    let normalized = normalize_text(line);
    catalog
        .entries()
        .any(|(_, term)| contains_term(&normalized, term))
}
