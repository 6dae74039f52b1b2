//! Query orchestration: classify, prompt, generate, format.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::{QueryClassifier, RuleBasedClassifier};
use crate::config::SahayakConfig;
use crate::error::{Result, SahayakError};
use crate::generation::{CannedGenerator, Generator};
use crate::prompt::PromptEngine;
use crate::tutor::analytics::{AnalyticsSummary, SessionAnalytics};
use crate::tutor::records::{Feedback, QueryRecord, ResponseRecord, TutorReply};

/// Configuration for the tutor service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Number of most recent responses that still accept feedback.
    pub max_tracked_responses: usize,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            max_tracked_responses: 10_000,
        }
    }
}

#[derive(Debug, Default)]
struct ServiceState {
    analytics: SessionAnalytics,
    responses: HashSet<Uuid>,
    recent: VecDeque<Uuid>,
}

impl ServiceState {
    /// Remember a response id, forgetting the oldest beyond `capacity`.
    fn track_response(&mut self, id: Uuid, capacity: usize) {
        self.responses.insert(id);
        self.recent.push_back(id);
        while self.recent.len() > capacity {
            if let Some(oldest) = self.recent.pop_front() {
                self.responses.remove(&oldest);
            }
        }
    }
}

/// Answers student queries end to end.
///
/// The classifier and prompt engine are immutable; only the analytics
/// counters sit behind a lock, so one service can be shared across threads.
///
/// Memory stays bounded for long-running services: feedback is accepted for
/// the most recent [`TutorConfig::max_tracked_responses`] responses only, and
/// analytics cover the current UTC day.
pub struct TutorService {
    classifier: Box<dyn QueryClassifier>,
    engine: PromptEngine,
    generator: Arc<dyn Generator>,
    config: TutorConfig,
    state: RwLock<ServiceState>,
}

impl std::fmt::Debug for TutorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutorService")
            .field("classifier", &self.classifier.name())
            .field("templates", &self.engine.catalogue().len())
            .field("generator", &self.generator.name())
            .finish()
    }
}

impl TutorService {
    /// Create a service from its collaborators.
    pub fn new(
        classifier: Box<dyn QueryClassifier>,
        engine: PromptEngine,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self {
            classifier,
            engine,
            generator,
            config: TutorConfig::default(),
            state: RwLock::new(ServiceState::default()),
        }
    }

    /// Replace the service configuration.
    pub fn with_config(mut self, config: TutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Create a service with the rule-based classifier and the canned
    /// generator, configured from `config`.
    pub fn from_config(config: &SahayakConfig) -> Result<Self> {
        let classifier = RuleBasedClassifier::with_config(config.classifier.clone());
        let engine = PromptEngine::from_config(&config.prompt)?;
        let generator = CannedGenerator::with_config(config.generation.clone());
        let service = Self::new(Box::new(classifier), engine, Arc::new(generator));
        Ok(service.with_config(config.tutor.clone()))
    }

    /// Get the prompt engine.
    pub fn engine(&self) -> &PromptEngine {
        &self.engine
    }

    /// Get the classifier.
    pub fn classifier(&self) -> &dyn QueryClassifier {
        self.classifier.as_ref()
    }

    /// Answer one query.
    pub fn process_query(&self, student_id: &str, query: &str) -> Result<TutorReply> {
        if student_id.trim().is_empty() {
            return Err(SahayakError::invalid_argument("student id must not be empty"));
        }
        if query.trim().is_empty() {
            return Err(SahayakError::invalid_argument("query must not be empty"));
        }

        let classification = self.classifier.classify(query);
        let query_record = QueryRecord::new(student_id, query, &classification);

        let template = self.engine.resolve_template(&classification);
        let prompt = self.engine.build_prompt(query, &classification);
        debug!(
            "query {} uses template '{}' ({} byte prompt)",
            query_record.id,
            template.name,
            prompt.len()
        );

        let generation = self.generator.generate(&prompt)?;
        let response = ResponseRecord {
            id: Uuid::new_v4(),
            query_id: query_record.id,
            template_used: template.name.clone(),
            response_text: self.engine.format_response(&generation.text),
            generation_time_ms: generation.elapsed.as_millis() as u64,
            tokens_used: generation.tokens_used,
            created_at: Utc::now(),
        };

        info!(
            "answered query {} for student {} via {} ({} tokens, {} ms)",
            query_record.id,
            student_id,
            self.generator.name(),
            response.tokens_used,
            response.generation_time_ms
        );

        let reply = TutorReply {
            query: query_record,
            response,
            classification,
        };

        let mut state = self.state.write();
        state.track_response(reply.response.id, self.config.max_tracked_responses);
        state.analytics.record_reply(&reply);

        Ok(reply)
    }

    /// Record feedback for a response this service produced.
    pub fn submit_feedback(&self, feedback: Feedback) -> Result<()> {
        feedback.validate()?;

        let mut state = self.state.write();
        if !state.responses.contains(&feedback.response_id) {
            return Err(SahayakError::not_found(format!(
                "response {}",
                feedback.response_id
            )));
        }
        state.analytics.record_feedback(&feedback);
        info!("recorded feedback for response {}", feedback.response_id);
        Ok(())
    }

    /// Summary of everything this service has seen.
    pub fn analytics(&self) -> AnalyticsSummary {
        self.state.read().analytics.summary()
    }
}
