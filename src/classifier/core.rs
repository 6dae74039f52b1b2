//! Helper functions for creating and running query classifiers.

use lazy_static::lazy_static;
use rayon::prelude::*;

use crate::classifier::classifier::QueryClassifier;
use crate::classifier::rule_classifier::{ClassifierConfig, RuleBasedClassifier};
use crate::classifier::types::ClassificationResult;

lazy_static! {
    /// Process-wide classifier with the default configuration.
    static ref DEFAULT_CLASSIFIER: RuleBasedClassifier = RuleBasedClassifier::new();
}

/// Create a new rule-based classifier behind the trait object.
pub fn new_rule_based(config: ClassifierConfig) -> Box<dyn QueryClassifier> {
    Box::new(RuleBasedClassifier::with_config(config))
}

/// Classify a query with the default rule-based classifier.
pub fn classify(query: &str) -> ClassificationResult {
    DEFAULT_CLASSIFIER.classify(query)
}

/// Classify many queries in parallel.
///
/// Results come back in input order.
pub fn classify_batch<C, S>(classifier: &C, queries: &[S]) -> Vec<ClassificationResult>
where
    C: QueryClassifier + ?Sized,
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| classifier.classify(query.as_ref()))
        .collect()
}
