//! Immutable template catalogue with fallback lookup.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::classifier::{Intent, Language};
use crate::error::Result;
use crate::prompt::builtin;
use crate::prompt::template::{AgeBucket, PromptTemplate, TemplateKey, TemplateRecord};

/// Key of the template used whenever a lookup misses.
pub const DEFAULT_TEMPLATE_KEY: TemplateKey = TemplateKey {
    intent: Intent::ConceptExplanation,
    language: Language::Hinglish,
    bucket: AgeBucket::Secondary,
};

/// Mapping from `(intent, language, bucket)` to a template.
///
/// Coverage is partial on purpose: most combinations resolve to the default
/// template. The catalogue is built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TemplateCatalogue {
    templates: BTreeMap<TemplateKey, PromptTemplate>,
}

impl TemplateCatalogue {
    /// The built-in catalogue.
    pub fn builtin() -> Self {
        let entries = [
            (DEFAULT_TEMPLATE_KEY, builtin::CONCEPT_EXPLANATION_HINGLISH_SECONDARY),
            (
                TemplateKey::new(Intent::ConceptExplanation, Language::English, AgeBucket::Primary),
                builtin::CONCEPT_EXPLANATION_ENGLISH_PRIMARY,
            ),
            (
                TemplateKey::new(Intent::Story, Language::Hinglish, AgeBucket::Secondary),
                builtin::STORY_HINGLISH_SECONDARY,
            ),
            (
                TemplateKey::new(Intent::Doubt, Language::Hinglish, AgeBucket::Secondary),
                builtin::DOUBT_HINGLISH_SECONDARY,
            ),
            (
                TemplateKey::new(Intent::Fun, Language::Hinglish, AgeBucket::Secondary),
                builtin::FUN_HINGLISH_SECONDARY,
            ),
            (
                TemplateKey::new(Intent::Homework, Language::Hinglish, AgeBucket::Secondary),
                builtin::HOMEWORK_HINGLISH_SECONDARY,
            ),
        ];

        let templates = entries
            .into_iter()
            .map(|(key, body)| (key, PromptTemplate::new(key.name(), body)))
            .collect();

        Self { templates }
    }

    /// The built-in catalogue extended by template records.
    ///
    /// Inactive records are skipped. When several active records share a
    /// key, the one with the highest version wins; records always replace
    /// built-in entries.
    pub fn with_records(records: Vec<TemplateRecord>) -> Result<Self> {
        let mut catalogue = Self::builtin();
        let mut versions: BTreeMap<TemplateKey, u32> = BTreeMap::new();

        for record in records {
            if !record.is_active {
                warn!(
                    "skipping inactive template record '{}' ({}/{})",
                    record.template_name, record.intent_type, record.language
                );
                continue;
            }

            let version = record.version;
            let (key, template) = record.into_entry()?;
            match versions.entry(key) {
                Entry::Occupied(existing) if *existing.get() >= version => {
                    debug!(
                        "template {key} v{version} shadowed by v{}",
                        existing.get()
                    );
                    continue;
                }
                Entry::Occupied(mut existing) => {
                    existing.insert(version);
                }
                Entry::Vacant(slot) => {
                    slot.insert(version);
                }
            }
            debug!("registered template {key} v{version} as '{}'", template.name);
            catalogue.templates.insert(key, template);
        }

        Ok(catalogue)
    }

    /// Load template records from a JSON file and extend the built-ins.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let records: Vec<TemplateRecord> = serde_json::from_str(&content)?;
        debug!(
            "loaded {} template records from {}",
            records.len(),
            path.as_ref().display()
        );
        Self::with_records(records)
    }

    /// Exact lookup without fallback.
    pub fn get(&self, key: &TemplateKey) -> Option<&PromptTemplate> {
        self.templates.get(key)
    }

    /// Lookup with fallback to the default template.
    pub fn resolve(&self, key: &TemplateKey) -> &PromptTemplate {
        match self.templates.get(key) {
            Some(template) => template,
            None => {
                debug!("no template for {key}, falling back to {DEFAULT_TEMPLATE_KEY}");
                self.default_template()
            }
        }
    }

    /// The default template.
    pub fn default_template(&self) -> &PromptTemplate {
        // Every constructor starts from the built-ins, which hold the default.
        &self.templates[&DEFAULT_TEMPLATE_KEY]
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TemplateKey, &PromptTemplate)> {
        self.templates.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when the catalogue has no entries.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::SahayakError;

    fn record(intent: &str, content: &str, version: u32, is_active: bool) -> TemplateRecord {
        TemplateRecord {
            template_name: format!("{intent}_v{version}"),
            intent_type: intent.to_string(),
            language: "English".to_string(),
            age_group: Some("secondary".to_string()),
            template_content: content.to_string(),
            version,
            is_active,
        }
    }

    #[test]
    fn test_builtin_entries() {
        let catalogue = TemplateCatalogue::builtin();
        assert_eq!(catalogue.len(), 6);
        assert!(!catalogue.is_empty());
        assert_eq!(
            catalogue.default_template().name,
            "concept_explanation_hinglish_secondary"
        );
        assert!(
            catalogue
                .get(&TemplateKey::new(Intent::Story, Language::Hinglish, AgeBucket::Secondary))
                .is_some()
        );
        for (key, template) in catalogue.iter() {
            assert_eq!(template.name, key.name());
            assert_eq!(template.body, template.body.trim());
        }
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let catalogue = TemplateCatalogue::builtin();
        let key = TemplateKey::new(Intent::Fun, Language::English, AgeBucket::Secondary);
        assert!(catalogue.get(&key).is_none());
        assert_eq!(catalogue.resolve(&key), catalogue.default_template());
    }

    #[test]
    fn test_records_extend_and_version() {
        let catalogue = TemplateCatalogue::with_records(vec![
            record("practice", "practice v2", 2, true),
            record("practice", "practice v1", 1, true),
            record("practice", "practice v9", 9, false),
            record("fun", "fun v1", 1, true),
        ])
        .unwrap();

        let key = TemplateKey::new(Intent::Practice, Language::English, AgeBucket::Secondary);
        assert_eq!(catalogue.get(&key).unwrap().body, "practice v2");
        assert_eq!(catalogue.get(&key).unwrap().name, "practice_v2");
        assert_eq!(catalogue.len(), 8);
    }

    #[test]
    fn test_records_replace_builtin() {
        let mut replacement = record("concept_explanation", "custom default", 1, true);
        replacement.language = "Hinglish".to_string();
        let catalogue = TemplateCatalogue::with_records(vec![replacement]).unwrap();

        assert_eq!(catalogue.len(), 6);
        assert_eq!(catalogue.default_template().body, "custom default");
    }

    #[test]
    fn test_invalid_record_is_an_error() {
        let result = TemplateCatalogue::with_records(vec![record("chat", "body", 1, true)]);
        assert!(matches!(result, Err(SahayakError::Template(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"intent_type": "practice", "language": "hindi", "age_group": "Primary (6-10)",
                 "template_content": "\n  Abhyas karo!\n"}}]"#
        )
        .unwrap();

        let catalogue = TemplateCatalogue::from_file(file.path()).unwrap();
        let key = TemplateKey::new(Intent::Practice, Language::Hindi, AgeBucket::Primary);
        let template = catalogue.get(&key).unwrap();
        assert_eq!(template.body, "Abhyas karo!");
        assert_eq!(template.name, "practice_hindi_primary");
    }

    #[test]
    fn test_from_missing_file() {
        let result = TemplateCatalogue::from_file("/nonexistent/templates.json");
        assert!(matches!(result, Err(SahayakError::Io(_))));
    }
}
