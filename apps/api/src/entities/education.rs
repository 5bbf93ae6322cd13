use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// One pattern per degree/graduation phrasing family, in fixed order.
/// Candidates come from capture groups, not the whole match, so the
/// trailing `.+` only anchors the phrasing without polluting output.
pub(crate) static EDUCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(Bachelor|B\.Sc|B\.Tech|BE|Bachelor of Technology|Bachelor of Engineering).+",
        r"(Master|M\.Sc|M\.Tech|MS|MEng|Master of Science).+",
        r"(\d{4}).*(Graduat|Degree|Bachelor|Master)",
    ]
    .iter()
    .map(|pattern| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("education pattern must compile")
    })
    .collect()
});

/// Collects degree phrasings across all patterns. Each match's non-empty
/// capture groups are joined by a single space to form one candidate;
/// duplicates collapse with first-seen order preserved.
pub fn extract_education(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for pattern in EDUCATION_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let groups: Vec<&str> = caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
            if groups.is_empty() {
                continue;
            }
            let candidate = groups.join(" ");
            if seen.insert(candidate.clone()) {
                out.push(candidate);
            }
        }
    }
    out
}
