//! Tokens produced by query tokenization.
//!
//! # Examples
//!
//! ```
//! use sahayak::analysis::token::Token;
//!
//! let token = Token::new("kahani", 5, 11);
//! assert_eq!(token.text, "kahani");
//! assert_eq!(token.utf16_len(), 6);
//! ```

/// A single word of a query, borrowed from the query text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The text content of the token
    pub text: &'a str,

    /// The byte offset where this token starts in the query
    pub start_offset: usize,

    /// The byte offset where this token ends in the query
    pub end_offset: usize,
}

impl<'a> Token<'a> {
    /// Create a token from its text and byte offsets.
    pub fn new(text: &'a str, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token in UTF-16 code units.
    ///
    /// Word lengths are measured the way browser clients measure strings,
    /// so characters outside the Basic Multilingual Plane (emoji) count twice.
    pub fn utf16_len(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari_counts_one_unit_per_codepoint() {
        let token = Token::new("कहानी", 0, "कहानी".len());
        assert_eq!(token.utf16_len(), 5);
        assert!(token.text.len() > token.utf16_len());
    }

    #[test]
    fn test_emoji_counts_two_units() {
        assert_eq!(Token::new("🌱", 0, 4).utf16_len(), 2);
        assert_eq!(Token::new("🌱🌱🌱", 0, 12).utf16_len(), 6);
    }
}
