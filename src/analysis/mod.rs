//! Text analysis module for Sahayak.
//!
//! This module provides the surface-level text measurements the classifier
//! relies on: whitespace tokenization, script detection for Latin and
//! Devanagari text, and per-query statistics such as word count and average
//! word length.

pub mod script;
pub mod stats;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use script::*;
pub use stats::*;
pub use token::*;
pub use tokenizer::*;
