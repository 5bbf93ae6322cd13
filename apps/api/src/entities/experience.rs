use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Lines beyond the tenth match are discarded entirely.
const MAX_EXPERIENCE_LINES: usize = 10;

/// Runs of newlines separate lines, so blank lines never produce entries.
pub(crate) static LINE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("line split pattern must compile"));

/// Whole-word signals that a line describes work experience.
pub(crate) static EXPERIENCE_WORDS: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\b(years|yrs|experience|worked|intern)\b")
        .case_insensitive(true)
        .build()
        .expect("experience pattern must compile")
});

/// Keyword-filtered experience lines: keep lines containing one of the
/// signal words, trimmed, in original order, capped at the first ten.
pub fn extract_experience(text: &str) -> Vec<String> {
    LINE_SPLIT
        .split(text)
        .filter(|line| EXPERIENCE_WORDS.is_match(line))
        .map(|line| line.trim().to_string())
        .take(MAX_EXPERIENCE_LINES)
        .collect()
}
