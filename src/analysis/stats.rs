//! Surface statistics of a query used for age-group and complexity decisions.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::WhitespaceTokenizer;

lazy_static! {
    /// Vocabulary that marks a query as advanced regardless of its length.
    static ref COMPLEX_VOCABULARY: Regex =
        Regex::new(r"(?i)photosynthesis|equation|polynomial|mitochondria")
            .expect("complex vocabulary pattern is valid");
}

/// Word count, character volume and vocabulary flags of a single query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryStats {
    /// Number of words in a whitespace split of the raw query.
    pub word_count: usize,
    /// Length of all non-whitespace text, in UTF-16 code units.
    pub non_whitespace_len: usize,
    /// The query mentions a term from the complex vocabulary list.
    pub has_complex_vocabulary: bool,
}

impl QueryStats {
    /// Measure a query.
    ///
    /// The word count follows a plain split on whitespace runs: leading
    /// whitespace contributes one empty word, and so does trailing
    /// whitespace. Empty and whitespace-only input yields a word count of
    /// zero.
    pub fn compute(query: &str) -> Self {
        let tokens = WhitespaceTokenizer::new().split(query);
        let word_count = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => {
                let leading = usize::from(first.start_offset > 0);
                let trailing = usize::from(last.end_offset < query.len());
                tokens.len() + leading + trailing
            }
            _ => 0,
        };

        QueryStats {
            word_count,
            non_whitespace_len: tokens.iter().map(|token| token.utf16_len()).sum(),
            has_complex_vocabulary: has_complex_vocabulary(query),
        }
    }

    /// Average non-whitespace length per word (0.0 for no words).
    pub fn avg_word_len(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.non_whitespace_len as f64 / self.word_count as f64
        }
    }

    /// True when the query contains no words at all.
    pub fn is_blank(&self) -> bool {
        self.word_count == 0
    }
}

/// Case-insensitive substring test against the complex vocabulary list.
pub fn has_complex_vocabulary(query: &str) -> bool {
    COMPLEX_VOCABULARY.is_match(query)
}
