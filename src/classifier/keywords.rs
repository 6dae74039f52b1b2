//! Keyword tables for intent and subject scoring.
//!
//! Tables are compile-time constants listed in tie-break order. Keywords are
//! lowercase and matched as substrings of the lowercased query, so
//! multi-word phrases such as "kya hai" work as well as single words.

use crate::classifier::types::{Intent, Subject};

/// A label together with the keywords that vote for it.
pub type KeywordTable<L> = [(L, &'static [&'static str])];

/// Intent keywords, in [`Intent::ALL`] order.
pub const INTENT_KEYWORDS: &KeywordTable<Intent> = &[
    (
        Intent::ConceptExplanation,
        &[
            "explain",
            "what is",
            "kya hai",
            "batao",
            "samjhao",
            "meaning",
            "definition",
        ],
    ),
    (Intent::Story, &["story", "kahani", "tale", "suna", "sunao"]),
    (
        Intent::Doubt,
        &[
            "doubt",
            "confused",
            "help",
            "stuck",
            "samajh nahi",
            "clear karo",
        ],
    ),
    (
        Intent::Practice,
        &["practice", "exercise", "problems", "questions", "solve"],
    ),
    (
        Intent::Homework,
        &["homework", "assignment", "project", "task"],
    ),
    (
        Intent::Fun,
        &["fun", "game", "quiz", "challenge", "interesting", "cool"],
    ),
];

/// Subject keywords, in [`Subject::KEYWORD_SUBJECTS`] order.
pub const SUBJECT_KEYWORDS: &KeywordTable<Subject> = &[
    (
        Subject::Math,
        &[
            "math",
            "maths",
            "algebra",
            "geometry",
            "calculation",
            "number",
            "equation",
        ],
    ),
    (
        Subject::Science,
        &[
            "science",
            "physics",
            "chemistry",
            "biology",
            "experiment",
            "photosynthesis",
            "gravity",
        ],
    ),
    (
        Subject::English,
        &["english", "grammar", "essay", "writing", "story"],
    ),
    (Subject::Hindi, &["hindi", "kavita", "poem"]),
    (Subject::Social, &["history", "geography", "civics", "social"]),
];

/// Number of distinct keywords from `keywords` that occur in `lowered`.
pub fn keyword_hits(lowered: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}

/// Pick the label with the strictly highest keyword score.
///
/// The scan keeps the first maximum it finds, so ties go to the earlier
/// table entry. When no label scores above zero, `default` is returned.
pub fn best_match<L: Copy>(lowered: &str, table: &KeywordTable<L>, default: L) -> L {
    let mut best = default;
    let mut best_score = 0;

    for (label, keywords) in table {
        let score = keyword_hits(lowered, keywords);
        if score > best_score {
            best_score = score;
            best = *label;
        }
    }

    best
}
