//! Query classifier trait definition.

use crate::classifier::types::ClassificationResult;

/// Query classifier trait.
///
/// Implementations map a raw student query to a [`ClassificationResult`].
/// Classification is total: any string, including an empty one, yields a
/// result, and identical input always yields identical output.
pub trait QueryClassifier: Send + Sync {
    /// Classify the given query.
    fn classify(&self, query: &str) -> ClassificationResult;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
