//! Interaction records produced around the classification core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::{AgeGroup, ClassificationResult, Complexity, Intent, Language, Subject};
use crate::error::{Result, SahayakError};

/// A student's query together with its detected labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: Uuid,
    pub student_id: String,
    pub query_text: String,
    pub detected_intent: Intent,
    pub detected_language: Language,
    pub detected_age_group: AgeGroup,
    pub detected_subject: Subject,
    pub complexity_level: Complexity,
    pub created_at: DateTime<Utc>,
}

impl QueryRecord {
    /// Create a record for a freshly classified query.
    pub fn new(
        student_id: impl Into<String>,
        query_text: impl Into<String>,
        classification: &ClassificationResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id: student_id.into(),
            query_text: query_text.into(),
            detected_intent: classification.intent,
            detected_language: classification.language,
            detected_age_group: classification.age_group,
            detected_subject: classification.subject,
            complexity_level: classification.complexity,
            created_at: Utc::now(),
        }
    }
}

/// The formatted answer served for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: Uuid,
    pub query_id: Uuid,
    /// Name of the template that actually served the query.
    pub template_used: String,
    pub response_text: String,
    pub generation_time_ms: u64,
    pub tokens_used: u32,
    pub created_at: DateTime<Utc>,
}

/// Everything a caller gets back for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorReply {
    pub query: QueryRecord,
    pub response: ResponseRecord,
    pub classification: ClassificationResult,
}

/// Student feedback on a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub response_id: Uuid,
    /// Star rating from 1 to 5.
    pub rating: Option<u8>,
    pub thumbs_up: Option<bool>,
    pub comment: Option<String>,
    pub time_spent_seconds: Option<u32>,
    pub follow_up_asked: Option<bool>,
    pub activity_completed: Option<bool>,
}

impl Feedback {
    /// Empty feedback for a response.
    pub fn new(response_id: Uuid) -> Self {
        Self {
            response_id,
            rating: None,
            thumbs_up: None,
            comment: None,
            time_spent_seconds: None,
            follow_up_asked: None,
            activity_completed: None,
        }
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_thumbs_up(mut self, thumbs_up: bool) -> Self {
        self.thumbs_up = Some(thumbs_up);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_follow_up(mut self, follow_up_asked: bool) -> Self {
        self.follow_up_asked = Some(follow_up_asked);
        self
    }

    pub fn with_activity_completed(mut self, activity_completed: bool) -> Self {
        self.activity_completed = Some(activity_completed);
        self
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<()> {
        match self.rating {
            Some(rating) if !(1..=5).contains(&rating) => Err(SahayakError::invalid_argument(
                format!("rating must be between 1 and 5, got {rating}"),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_record_copies_labels() {
        let classification = ClassificationResult {
            intent: Intent::Story,
            language: Language::Hinglish,
            age_group: AgeGroup::Primary,
            subject: Subject::Hindi,
            complexity: Complexity::Easy,
            confidence: 0.85,
        };
        let record = QueryRecord::new("student-1", "ek kavita sunao", &classification);

        assert_eq!(record.student_id, "student-1");
        assert_eq!(record.detected_intent, Intent::Story);
        assert_eq!(record.detected_language, Language::Hinglish);
        assert_eq!(record.detected_age_group, AgeGroup::Primary);
        assert_eq!(record.detected_subject, Subject::Hindi);
        assert_eq!(record.complexity_level, Complexity::Easy);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["detected_age_group"], "Primary (6-10)");
    }

    #[test]
    fn test_feedback_validation() {
        let id = Uuid::new_v4();
        assert!(Feedback::new(id).validate().is_ok());
        assert!(Feedback::new(id).with_rating(1).validate().is_ok());
        assert!(Feedback::new(id).with_rating(5).validate().is_ok());
        assert!(Feedback::new(id).with_rating(0).validate().is_err());
        assert!(Feedback::new(id).with_rating(6).validate().is_err());
    }
}
