//! # Sahayak
//!
//! Rule-based classification of student questions and prompt assembly for a
//! bilingual (English / Hindi / Hinglish) study assistant.
//!
//! ## Features
//!
//! - Deterministic query classification: intent, language, age group,
//!   subject and complexity
//! - Template catalogue keyed by `(intent, language, age bucket)` with
//!   fallback to a default template
//! - Prompt assembly and display formatting of model output
//! - A pluggable generator seam with an offline implementation
//! - A tutor service that ties the pieces together and keeps in-memory
//!   analytics
//!
//! ## Example
//!
//! ```
//! use sahayak::classifier;
//! use sahayak::prompt::PromptEngine;
//!
//! let classification = classifier::classify("Ek kahani sunao");
//! let prompt = PromptEngine::new().build_prompt("Ek kahani sunao", &classification);
//! assert!(prompt.contains("- Intent: story"));
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod prompt;
pub mod tutor;

pub mod prelude {
    pub use crate::classifier::{
        AgeGroup, ClassificationResult, Complexity, Intent, Language, QueryClassifier,
        RuleBasedClassifier, Subject, classify,
    };
    pub use crate::config::SahayakConfig;
    pub use crate::error::{Result, SahayakError};
    pub use crate::generation::{CannedGenerator, Generation, Generator};
    pub use crate::prompt::{PromptEngine, TemplateCatalogue};
    pub use crate::tutor::{Feedback, TutorReply, TutorService};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
