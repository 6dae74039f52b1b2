//! Template selection, prompt assembly and response formatting.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classifier::ClassificationResult;
use crate::error::Result;
use crate::prompt::catalogue::TemplateCatalogue;
use crate::prompt::template::{PromptTemplate, TemplateKey};

/// Closing instruction appended to every prompt.
pub const CLOSING_INSTRUCTION: &str =
    r#"Now provide an amazing response that makes them say "Wow!" or "One more!""#;

/// Configuration for the prompt engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Optional JSON file of template records layered over the built-ins.
    pub template_file: Option<PathBuf>,
}

/// Builds generation prompts from classified queries.
///
/// All operations are read-only over an immutable catalogue, so one engine
/// can serve any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct PromptEngine {
    catalogue: TemplateCatalogue,
}

impl PromptEngine {
    /// Create an engine over the built-in catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over the given catalogue.
    pub fn with_catalogue(catalogue: TemplateCatalogue) -> Self {
        Self { catalogue }
    }

    /// Create an engine from configuration, loading the template file if set.
    pub fn from_config(config: &PromptConfig) -> Result<Self> {
        let catalogue = match &config.template_file {
            Some(path) => TemplateCatalogue::from_file(path)?,
            None => TemplateCatalogue::builtin(),
        };
        Ok(Self::with_catalogue(catalogue))
    }

    /// Get the catalogue.
    pub fn catalogue(&self) -> &TemplateCatalogue {
        &self.catalogue
    }

    /// The template that serves a classification, after fallback.
    pub fn resolve_template(&self, classification: &ClassificationResult) -> &PromptTemplate {
        self.catalogue
            .resolve(&TemplateKey::for_classification(classification))
    }

    /// The template body that serves a classification, after fallback.
    pub fn select_template(&self, classification: &ClassificationResult) -> &str {
        &self.resolve_template(classification).body
    }

    /// Assemble the full generation prompt.
    ///
    /// Layout: template body, quoted question, context block with the five
    /// classification fields, closing instruction. Values are interpolated
    /// verbatim.
    pub fn build_prompt(&self, query: &str, classification: &ClassificationResult) -> String {
        let template = self.select_template(classification);
        let prompt = format!(
            "{template}\n\
             \n\
             STUDENT'S QUESTION: \"{query}\"\n\
             \n\
             CONTEXT:\n\
             - Intent: {}\n\
             - Age Group: {}\n\
             - Subject: {}\n\
             - Language: {}\n\
             - Complexity: {}\n\
             \n\
             {CLOSING_INSTRUCTION}",
            classification.intent,
            classification.age_group,
            classification.subject,
            classification.language,
            classification.complexity,
        );
        prompt.trim().to_string()
    }

    /// Normalize raw generator output for display.
    ///
    /// Output is trimmed; if it has no paragraph break, every single newline
    /// becomes a blank line.
    pub fn format_response(&self, raw: &str) -> String {
        format_response(raw)
    }
}

/// Normalize raw generator output for display.
pub fn format_response(raw: &str) -> String {
    let formatted = raw.trim();
    if formatted.contains("\n\n") {
        formatted.to_string()
    } else {
        formatted.replace('\n', "\n\n")
    }
}
