//! Configuration for Sahayak.
//!
//! Each component owns its configuration struct; [`SahayakConfig`] groups
//! them and is what the CLI reads from a JSON file.
//!
//! ```json
//! {
//!   "classifier": { "confidence": 0.85 },
//!   "prompt": { "template_file": "templates.json" },
//!   "generation": { "canned_tokens": 500 },
//!   "tutor": { "max_tracked_responses": 10000 }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierConfig;
use crate::error::{Result, SahayakError};
use crate::generation::GenerationConfig;
use crate::prompt::PromptConfig;
use crate::tutor::TutorConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SahayakConfig {
    /// Classifier configuration.
    pub classifier: ClassifierConfig,
    /// Prompt engine configuration.
    pub prompt: PromptConfig,
    /// Generator configuration.
    pub generation: GenerationConfig,
    /// Tutor service configuration.
    pub tutor: TutorConfig,
}

impl SahayakConfig {
    /// Load configuration from a JSON file.
    ///
    /// Missing sections and fields take their defaults. A relative
    /// `prompt.template_file` is resolved against the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config: SahayakConfig = serde_json::from_str(&content)?;

        let resolved = config
            .prompt
            .template_file
            .as_ref()
            .filter(|template_file| template_file.is_relative())
            .and_then(|template_file| path.parent().map(|dir| dir.join(template_file)));
        if resolved.is_some() {
            config.prompt.template_file = resolved;
        }

        config.validate()?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let confidence = self.classifier.confidence;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(SahayakError::config(format!(
                "classifier.confidence must be within [0, 1], got {confidence}"
            )));
        }
        if self.tutor.max_tracked_responses == 0 {
            return Err(SahayakError::config("tutor.max_tracked_responses must be at least 1"));
        }
        Ok(())
    }
}
