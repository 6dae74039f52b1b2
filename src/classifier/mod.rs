//! Rule-based classification of student queries.
//!
//! A raw query (English, Hindi or Hinglish) is mapped to a small categorical
//! feature vector: intent, language, age group, subject and complexity.
//!
//! # Architecture
//!
//! - `QueryClassifier` trait: Common interface for all classifiers
//! - `RuleBasedClassifier`: Keyword, script and length rules
//! - `keywords`: Constant keyword tables in tie-break order
//! - `types`: Typed labels and `ClassificationResult`
//!
//! # Example
//!
//! ```
//! use sahayak::classifier::{self, Intent, Language, Subject};
//!
//! let result = classifier::classify("Photosynthesis kya hai?");
//! assert_eq!(result.intent, Intent::ConceptExplanation);
//! assert_eq!(result.subject, Subject::Science);
//! // Romanised Hindi is still Latin script.
//! assert_eq!(result.language, Language::English);
//! ```

mod classifier;
mod core;
pub mod keywords;
mod rule_classifier;
mod types;

// Public exports
pub use classifier::QueryClassifier;
pub use self::core::{classify, classify_batch, new_rule_based};
pub use rule_classifier::{ClassifierConfig, RuleBasedClassifier};
pub use types::{
    AgeGroup, ClassificationResult, Complexity, DEFAULT_CONFIDENCE, Intent, Language, Subject,
};
