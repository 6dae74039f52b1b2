//! Whitespace tokenizer for student queries.
//!
//! # Examples
//!
//! ```
//! use sahayak::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let tokens = WhitespaceTokenizer::new().split("photosynthesis kya hai");
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::Token;

/// A tokenizer that splits text on runs of Unicode whitespace.
///
/// Leading and trailing whitespace never produce empty tokens, so an empty
/// or whitespace-only string yields no tokens at all. Callers that need to
/// know about the edges look at the first and last offsets.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split text into tokens with byte offsets.
    pub fn split<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(word_start)) => {
                    tokens.push(Token::new(&text[word_start..offset], word_start, offset));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }

        if let Some(word_start) = start {
            tokens.push(Token::new(&text[word_start..], word_start, text.len()));
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokens = WhitespaceTokenizer::new().split("hello  world\ttest");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_offsets() {
        let query = "  maths का\nanswer ";
        let tokens = WhitespaceTokenizer::new().split(query);

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[0].end_offset, 7);
        assert_eq!(tokens[1].text, "का");
        assert_eq!(&query[tokens[1].start_offset..tokens[1].end_offset], "का");
        assert_eq!(tokens[2].text, "answer");
        assert_eq!(tokens[2].end_offset, query.len() - 1);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert!(tokenizer.split("").is_empty());
        assert!(tokenizer.split(" \t\n ").is_empty());
    }
}
