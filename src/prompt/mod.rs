//! Prompt engine: template selection, prompt assembly and output formatting.
//!
//! Templates are keyed by `(intent, language, age bucket)`. Lookups that miss
//! fall back to the Hinglish/secondary concept explanation template.
//!
//! # Example
//!
//! ```
//! use sahayak::classifier;
//! use sahayak::prompt::PromptEngine;
//!
//! let engine = PromptEngine::new();
//! let query = "Photosynthesis kya hai?";
//! let classification = classifier::classify(query);
//!
//! let prompt = engine.build_prompt(query, &classification);
//! assert!(prompt.contains("STUDENT'S QUESTION: \"Photosynthesis kya hai?\""));
//! assert!(prompt.contains("- Subject: science"));
//!
//! assert_eq!(engine.format_response("line1\nline2"), "line1\n\nline2");
//! ```

pub mod builtin;
pub mod catalogue;
pub mod engine;
pub mod template;

// Re-export commonly used types
pub use catalogue::{DEFAULT_TEMPLATE_KEY, TemplateCatalogue};
pub use engine::{CLOSING_INSTRUCTION, PromptConfig, PromptEngine, format_response};
pub use template::{AgeBucket, PromptTemplate, TemplateKey, TemplateRecord};
