//! Template keys and template values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::{AgeGroup, ClassificationResult, Intent, Language};
use crate::error::{Result, SahayakError};

/// Coarse age grouping used by template keys.
///
/// Only Primary is distinct; Secondary and Senior share templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBucket {
    Primary,
    Secondary,
}

impl AgeBucket {
    /// Lowercase label as used in template names.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBucket::Primary => "primary",
            AgeBucket::Secondary => "secondary",
        }
    }

    /// Parse a bucket from either a bucket label ("primary") or an age group
    /// label ("Primary (6-10)").
    pub fn parse(label: &str) -> Result<Self> {
        match label {
            "primary" => Ok(AgeBucket::Primary),
            "secondary" => Ok(AgeBucket::Secondary),
            other => other
                .parse::<AgeGroup>()
                .map(AgeBucket::from)
                .map_err(|_| SahayakError::parse(format!("unknown age bucket '{other}'"))),
        }
    }
}

impl From<AgeGroup> for AgeBucket {
    fn from(age_group: AgeGroup) -> Self {
        match age_group {
            AgeGroup::Primary => AgeBucket::Primary,
            AgeGroup::Secondary | AgeGroup::Senior => AgeBucket::Secondary,
        }
    }
}

/// Composite catalogue key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateKey {
    pub intent: Intent,
    pub language: Language,
    pub bucket: AgeBucket,
}

impl TemplateKey {
    /// Create a new key.
    pub fn new(intent: Intent, language: Language, bucket: AgeBucket) -> Self {
        Self {
            intent,
            language,
            bucket,
        }
    }

    /// The key a classification looks up.
    pub fn for_classification(classification: &ClassificationResult) -> Self {
        Self::new(
            classification.intent,
            classification.language,
            AgeBucket::from(classification.age_group),
        )
    }

    /// Template name, e.g. `concept_explanation_hinglish_secondary`.
    pub fn name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.intent.as_str(),
            self.language.lowercase(),
            self.bucket.as_str()
        )
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A named prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub name: String,
    pub body: String,
}

impl PromptTemplate {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// On-disk template definition used to extend the built-in catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Display name; defaults to the key name when empty.
    #[serde(default)]
    pub template_name: String,
    /// Intent label, e.g. "doubt".
    pub intent_type: String,
    /// Language label, case-insensitive, e.g. "Hinglish" or "hinglish".
    pub language: String,
    /// Bucket or age group label; a missing value means "secondary".
    #[serde(default)]
    pub age_group: Option<String>,
    pub template_content: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_version() -> u32 {
    1
}

fn default_active() -> bool {
    true
}

impl TemplateRecord {
    /// Resolve the catalogue key named by this record.
    pub fn key(&self) -> Result<TemplateKey> {
        let intent = self
            .intent_type
            .parse::<Intent>()
            .map_err(|e| SahayakError::template(format!("{}: {e}", self.display_name())))?;
        let language = parse_language(&self.language)
            .map_err(|e| SahayakError::template(format!("{}: {e}", self.display_name())))?;
        let bucket = match self.age_group.as_deref() {
            None => AgeBucket::Secondary,
            Some(label) => AgeBucket::parse(label)
                .map_err(|e| SahayakError::template(format!("{}: {e}", self.display_name())))?,
        };
        Ok(TemplateKey::new(intent, language, bucket))
    }

    /// Convert the record into a catalogue entry.
    pub fn into_entry(self) -> Result<(TemplateKey, PromptTemplate)> {
        let key = self.key()?;
        let body = self.template_content.trim();
        if body.is_empty() {
            return Err(SahayakError::template(format!(
                "{}: template content is empty",
                self.display_name()
            )));
        }
        let name = if self.template_name.trim().is_empty() {
            key.name()
        } else {
            self.template_name.trim().to_string()
        };
        Ok((key, PromptTemplate::new(name, body)))
    }

    fn display_name(&self) -> &str {
        if self.template_name.is_empty() {
            "template record"
        } else {
            &self.template_name
        }
    }
}

fn parse_language(label: &str) -> Result<Language> {
    match label.to_lowercase().as_str() {
        "hinglish" => Ok(Language::Hinglish),
        "hindi" => Ok(Language::Hindi),
        "english" => Ok(Language::English),
        _ => Err(SahayakError::parse(format!("unknown language '{label}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Complexity, Subject};

    fn record(intent: &str, language: &str, age_group: Option<&str>) -> TemplateRecord {
        TemplateRecord {
            template_name: String::new(),
            intent_type: intent.to_string(),
            language: language.to_string(),
            age_group: age_group.map(str::to_string),
            template_content: "  body  ".to_string(),
            version: 1,
            is_active: true,
        }
    }

    #[test]
    fn test_senior_shares_secondary_bucket() {
        assert_eq!(AgeBucket::from(AgeGroup::Primary), AgeBucket::Primary);
        assert_eq!(AgeBucket::from(AgeGroup::Secondary), AgeBucket::Secondary);
        assert_eq!(AgeBucket::from(AgeGroup::Senior), AgeBucket::Secondary);
    }

    #[test]
    fn test_key_name() {
        let key = TemplateKey::new(Intent::ConceptExplanation, Language::Hinglish, AgeBucket::Secondary);
        assert_eq!(key.name(), "concept_explanation_hinglish_secondary");
        assert_eq!(key.to_string(), key.name());
    }

    #[test]
    fn test_key_for_classification() {
        let classification = ClassificationResult {
            intent: Intent::Fun,
            language: Language::English,
            age_group: AgeGroup::Senior,
            subject: Subject::General,
            complexity: Complexity::Medium,
            confidence: 0.85,
        };
        let key = TemplateKey::for_classification(&classification);
        assert_eq!(key.name(), "fun_english_secondary");
    }

    #[test]
    fn test_record_into_entry() {
        let (key, template) = record("doubt", "hinglish", Some("Primary (6-10)"))
            .into_entry()
            .unwrap();
        assert_eq!(
            key,
            TemplateKey::new(Intent::Doubt, Language::Hinglish, AgeBucket::Primary)
        );
        assert_eq!(template.name, "doubt_hinglish_primary");
        assert_eq!(template.body, "body");

        let (key, _) = record("story", "English", None).into_entry().unwrap();
        assert_eq!(key.bucket, AgeBucket::Secondary);
    }

    #[test]
    fn test_record_with_bad_labels() {
        assert!(matches!(
            record("doubt_clearing", "hinglish", None).key(),
            Err(SahayakError::Template(_))
        ));
        assert!(matches!(
            record("doubt", "tamil", None).key(),
            Err(SahayakError::Template(_))
        ));
        assert!(matches!(
            record("doubt", "hindi", Some("college")).key(),
            Err(SahayakError::Template(_))
        ));

        let mut empty = record("doubt", "hindi", None);
        empty.template_content = "   ".to_string();
        assert!(empty.into_entry().is_err());
    }
}
