//! Generator trait definition.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw output of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// Unformatted model text.
    pub text: String,
    /// Tokens reported by the backend (0 when unknown).
    pub tokens_used: u32,
    /// Wall-clock time spent generating.
    pub elapsed: Duration,
}

/// Generator trait.
///
/// The seam between prompt assembly and whatever language model answers the
/// prompt. Implementations must be shareable across threads.
pub trait Generator: Send + Sync {
    /// Produce a raw answer for the assembled prompt.
    fn generate(&self, prompt: &str) -> Result<Generation>;

    /// Get the name of this generator for debugging and logging.
    fn name(&self) -> &str;
}
