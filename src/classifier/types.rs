//! Categorical labels produced by query classification.
//!
//! Every label type serializes to, displays as, and parses from the exact
//! wire label used by the chat and analytics layers (for example
//! `"concept_explanation"` or `"Primary (6-10)"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SahayakError};

/// Confidence attached to every rule-based classification.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// The wire label of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SahayakError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    other => Err(SahayakError::parse(format!(
                        "unknown {} '{other}'",
                        $kind
                    ))),
                }
            }
        }
    };
}

label_enum! {
    /// The pedagogical purpose of a query.
    Intent, "intent" {
        /// Explain a concept.
        #[default]
        ConceptExplanation => "concept_explanation",
        /// Tell a story.
        Story => "story",
        /// Clear up a doubt.
        Doubt => "doubt",
        /// Practice problems.
        Practice => "practice",
        /// Help with homework.
        Homework => "homework",
        /// Games, quizzes and fun facts.
        Fun => "fun",
    }
}

impl Intent {
    /// All intents in declaration order. Keyword scoring scans in this
    /// order and keeps the first maximum on ties.
    pub const ALL: [Intent; 6] = [
        Intent::ConceptExplanation,
        Intent::Story,
        Intent::Doubt,
        Intent::Practice,
        Intent::Homework,
        Intent::Fun,
    ];

    /// Human-readable label, e.g. "concept explanation".
    pub fn display_label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

label_enum! {
    /// Language of a query, decided by script.
    Language, "language" {
        /// Latin letters and Devanagari mixed.
        Hinglish => "Hinglish",
        /// Devanagari without Latin letters.
        Hindi => "Hindi",
        /// Everything else.
        #[default]
        English => "English",
    }
}

impl Language {
    /// Lowercase label as used in template names.
    pub fn lowercase(&self) -> &'static str {
        match self {
            Language::Hinglish => "hinglish",
            Language::Hindi => "hindi",
            Language::English => "english",
        }
    }
}

label_enum! {
    /// Estimated age group of the student asking.
    AgeGroup, "age group" {
        /// Ages 6 to 10.
        Primary => "Primary (6-10)",
        /// Ages 11 to 15.
        #[default]
        Secondary => "Secondary (11-15)",
        /// Ages 16 to 18.
        Senior => "Senior (16-18)",
    }
}

label_enum! {
    /// School subject a query is about.
    Subject, "subject" {
        /// Mathematics.
        Math => "math",
        /// Science.
        Science => "science",
        /// English language.
        English => "english",
        /// Hindi language.
        Hindi => "hindi",
        /// Social studies.
        Social => "social",
        /// No subject keyword matched.
        #[default]
        General => "General",
    }
}

impl Subject {
    /// Subjects that carry keyword lists, in tie-break order.
    pub const KEYWORD_SUBJECTS: [Subject; 5] = [
        Subject::Math,
        Subject::Science,
        Subject::English,
        Subject::Hindi,
        Subject::Social,
    ];
}

label_enum! {
    /// Expected difficulty of a good answer.
    Complexity, "complexity" {
        /// Easy.
        Easy => "Easy",
        /// Medium.
        #[default]
        Medium => "Medium",
        /// Hard.
        Hard => "Hard",
    }
}

/// The categorical feature vector computed from a single query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub intent: Intent,
    pub language: Language,
    pub age_group: AgeGroup,
    pub subject: Subject,
    pub complexity: Complexity,
    /// Fixed confidence; the rules do not model match strength.
    pub confidence: f64,
}

impl Default for ClassificationResult {
    /// concept_explanation / English / Secondary (11-15) / General / Medium.
    fn default() -> Self {
        Self {
            intent: Intent::default(),
            language: Language::default(),
            age_group: AgeGroup::default(),
            subject: Subject::default(),
            complexity: Complexity::default(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}
