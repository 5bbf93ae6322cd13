//! Two-stage document ingestion, stage two: lexical entity extraction.
//!
//! Pure text matching over raw résumé text — no I/O and no error states.
//! The three sub-extractors run unconditionally and independently.

pub mod education;
pub mod experience;
pub mod handlers;
pub mod skills;

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value};

/// Structured facets derived from raw résumé text.
#[derive(Debug, Serialize)]
pub struct EntityExtractionOutcome {
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    /// Reserved for future structural segmentation; always `{}` today.
    pub sections: Map<String, Value>,
}

pub fn extract_entities(text: &str) -> EntityExtractionOutcome {
    EntityExtractionOutcome {
        skills: skills::extract_skills(text),
        education: education::extract_education(text),
        experience: experience::extract_experience(text),
        sections: Map::new(),
    }
}

/// Forces the lazily compiled lexicons so they exist as immutable,
/// process-wide state before the first request arrives.
pub fn warm_lexicons() {
    Lazy::force(&education::EDUCATION_PATTERNS);
    Lazy::force(&experience::EXPERIENCE_WORDS);
    Lazy::force(&experience::LINE_SPLIT);
}
