use std::collections::{BTreeMap, BTreeSet};

use crate::profile::normalize::find_term;

/// Qualifier keyword → proficiency level.
const QUALIFIERS: &[(&str, u8)] = &[
    ("expert", 5),
    ("advanced", 4),
    ("proficient", 4),
    ("experienced", 3),
    ("intermediate", 3),
    ("familiar", 2),
    ("basic", 1),
    ("beginner", 1),
];

pub const DEFAULT_PROFICIENCY: u8 = 2;

/// Characters inspected on each side of a skill mention.
const CONTEXT_WINDOW: usize = 50;

/// Estimates a 1–5 proficiency for every skill from qualifier words near its first
/// mention in `normalized`. Heuristic: the highest qualifier in the window wins;
/// with no qualifier in the window the score is `DEFAULT_PROFICIENCY`.
pub fn score_proficiency(normalized: &str, skills: &BTreeSet<String>) -> BTreeMap<String, u8> {
    skills
        .iter()
        .map(|skill| (skill.clone(), score_skill(normalized, skill)))
        .collect()
}

fn score_skill(normalized: &str, skill: &str) -> u8 {
    let Some(start) = find_term(normalized, skill) else {
        return DEFAULT_PROFICIENCY;
    };
    let window = context_window(normalized, start, start + skill.len());

    QUALIFIERS
        .iter()
        .filter(|(keyword, _)| window.contains(keyword))
        .map(|(_, level)| *level)
        .max()
        .unwrap_or(DEFAULT_PROFICIENCY)
}

/// `text[start..end]` widened by `CONTEXT_WINDOW` characters on each side.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_WINDOW - 1)
        .map_or(0, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_WINDOW)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::normalize::normalize_text;

    fn skills(terms: &[&str]) -> BTreeSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_expert_qualifier_nearby() {
        let text = normalize_text("5+ years experience in Python, expert level");
        let scores = score_proficiency(&text, &skills(&["python"]));
        assert_eq!(scores["python"], 5);
    }

    #[test]
    fn test_default_without_qualifier() {
        let text = normalize_text("Used SQL daily at work");
        let scores = score_proficiency(&text, &skills(&["sql"]));
        assert_eq!(scores["sql"], DEFAULT_PROFICIENCY);
    }

    #[test]
    fn test_maximum_qualifier_wins() {
        let text = normalize_text("basic familiarity but advanced docker user");
        let scores = score_proficiency(&text, &skills(&["docker"]));
        assert_eq!(scores["docker"], 4);
    }

    #[test]
    fn test_low_qualifier_scores_below_default() {
        let text = normalize_text("beginner with kotlin");
        let scores = score_proficiency(&text, &skills(&["kotlin"]));
        assert_eq!(scores["kotlin"], 1);
    }

    #[test]
    fn test_qualifier_outside_window_ignored() {
        let padding = "lorem ipsum ".repeat(10);
        let text = normalize_text(&format!("expert {padding} rust"));
        let scores = score_proficiency(&text, &skills(&["rust"]));
        assert_eq!(scores["rust"], DEFAULT_PROFICIENCY);
    }

    #[test]
    fn test_window_is_char_boundary_safe() {
        let text = normalize_text(&format!("{} intermediate go", "é".repeat(80)));
        let scores = score_proficiency(&text, &skills(&["go"]));
        assert_eq!(scores["go"], 3);
    }

    #[test]
    fn test_scores_within_range() {
        let text = normalize_text("expert python, proficient sql, familiar with git");
        let scores = score_proficiency(&text, &skills(&["python", "sql", "git"]));
        assert!(scores.values().all(|s| (1..=5).contains(s)));
        assert_eq!(scores.len(), 3);
    }
}
