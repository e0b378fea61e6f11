use once_cell::sync::Lazy;
use regex::Regex;

/// Anything outside word characters, whitespace and `. , @ - + ( )`.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\s.,@\-+()]").expect("static disallowed-character pattern")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

/// Canonical form used by every keyword matcher: lowercase, filtered to the
/// allow-list, single-spaced and trimmed.
///
/// Disallowed characters become spaces before whitespace is collapsed, which keeps
/// the function idempotent.
pub fn normalize_text(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let filtered = DISALLOWED.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&filtered, " ");
    collapsed.trim().to_string()
}

/// True when `text[start..end]` is not glued to a word character on either side.
pub fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Byte offset of the first word-bounded occurrence of `term` in `text`.
pub fn find_term(text: &str, term: &str) -> Option<usize> {
    if term.is_empty() {
        return None;
    }
    text.match_indices(term)
        .map(|(start, _)| start)
        .find(|&start| is_word_bounded(text, start, start + term.len()))
}

pub fn contains_term(text: &str, term: &str) -> bool {
    find_term(text, term).is_some()
}

/// Like `contains_term`, but only the left edge must be a word boundary, so
/// "bachelor" also matches "bachelors".
pub fn contains_word_prefix(text: &str, term: &str) -> bool {
    !term.is_empty()
        && text
            .match_indices(term)
            .any(|(start, _)| !text[..start].chars().next_back().is_some_and(is_word_char))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
