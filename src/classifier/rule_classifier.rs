//! Rule-based query classifier.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::script::ScriptProfile;
use crate::analysis::stats::QueryStats;
use crate::classifier::keywords::{INTENT_KEYWORDS, SUBJECT_KEYWORDS, best_match};
use crate::classifier::types::{
    AgeGroup, ClassificationResult, Complexity, DEFAULT_CONFIDENCE, Intent, Language, Subject,
};

use super::classifier::QueryClassifier;

/// Configuration for the rule-based classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Confidence reported with every classification.
    pub confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

/// Rule-based classifier.
///
/// Intent and subject come from keyword scoring, language from script
/// detection, and age group and complexity from simple query statistics.
/// The classifier holds no mutable state and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedClassifier {
    config: ClassifierConfig,
}

impl RuleBasedClassifier {
    /// Create a classifier with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with the given configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Detect the intent by keyword score; ties go to the earlier intent.
    pub fn classify_intent(&self, query: &str) -> Intent {
        best_match(&query.to_lowercase(), INTENT_KEYWORDS, Intent::default())
    }

    /// Detect the language from the scripts present in the query.
    pub fn classify_language(&self, query: &str) -> Language {
        let profile = ScriptProfile::of(query);
        if profile.is_mixed() {
            Language::Hinglish
        } else if profile.has_devanagari {
            Language::Hindi
        } else {
            Language::English
        }
    }

    /// Estimate the age group from length, word size and vocabulary.
    pub fn classify_age_group(&self, stats: &QueryStats) -> AgeGroup {
        if stats.word_count < 8 && stats.avg_word_len() < 5.0 && !stats.has_complex_vocabulary {
            AgeGroup::Primary
        } else if stats.has_complex_vocabulary || stats.word_count > 15 {
            AgeGroup::Senior
        } else {
            AgeGroup::Secondary
        }
    }

    /// Detect the subject by keyword score, falling back to General.
    pub fn classify_subject(&self, query: &str) -> Subject {
        best_match(&query.to_lowercase(), SUBJECT_KEYWORDS, Subject::default())
    }

    /// Derive the complexity from the age group and word count.
    pub fn classify_complexity(&self, age_group: AgeGroup, word_count: usize) -> Complexity {
        match age_group {
            AgeGroup::Primary if word_count > 10 => Complexity::Medium,
            AgeGroup::Primary => Complexity::Easy,
            AgeGroup::Senior if word_count > 20 => Complexity::Hard,
            AgeGroup::Senior => Complexity::Medium,
            AgeGroup::Secondary => Complexity::Medium,
        }
    }
}

impl QueryClassifier for RuleBasedClassifier {
    fn classify(&self, query: &str) -> ClassificationResult {
        let stats = QueryStats::compute(query);
        if stats.is_blank() {
            debug!("blank query, using default classification");
            return ClassificationResult {
                confidence: self.config.confidence,
                ..ClassificationResult::default()
            };
        }

        let age_group = self.classify_age_group(&stats);
        let result = ClassificationResult {
            intent: self.classify_intent(query),
            language: self.classify_language(query),
            age_group,
            subject: self.classify_subject(query),
            complexity: self.classify_complexity(age_group, stats.word_count),
            confidence: self.config.confidence,
        };

        debug!(
            "classified query ({} words): intent={} language={} age_group={} subject={} complexity={}",
            stats.word_count,
            result.intent,
            result.language,
            result.age_group,
            result.subject,
            result.complexity
        );

        result
    }

    fn name(&self) -> &str {
        "rule_based"
    }
}
