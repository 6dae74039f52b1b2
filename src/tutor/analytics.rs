//! In-process usage analytics.

use std::collections::{BTreeMap, HashSet};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::Intent;
use crate::tutor::records::{Feedback, TutorReply};

/// Aggregated view of the interactions seen by one service instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub date: NaiveDate,
    pub total_queries: usize,
    pub unique_students: usize,
    /// Mean star rating over rated feedback (0.0 when none).
    pub avg_rating: f64,
    pub avg_response_time_ms: f64,
    /// Share of feedback entries that reported a follow-up question.
    pub follow_up_rate: f64,
    /// Share of feedback entries that reported a completed activity.
    pub activity_completion_rate: f64,
    pub intent_distribution: BTreeMap<Intent, usize>,
}

/// Running counters behind [`AnalyticsSummary`].
///
/// Counters cover one UTC day. The first reply of a new day resets them.
#[derive(Debug, Clone, Default)]
pub struct SessionAnalytics {
    day: Option<NaiveDate>,
    students: HashSet<String>,
    total_queries: usize,
    total_generation_ms: u64,
    rating_sum: u64,
    rating_count: usize,
    feedback_count: usize,
    follow_ups: usize,
    activities_completed: usize,
    intents: BTreeMap<Intent, usize>,
}

impl SessionAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_reply(&mut self, reply: &TutorReply) {
        let day = reply.query.created_at.date_naive();
        if self.day != Some(day) {
            *self = Self {
                day: Some(day),
                ..Self::default()
            };
        }

        self.students.insert(reply.query.student_id.clone());
        self.total_queries += 1;
        self.total_generation_ms += reply.response.generation_time_ms;
        *self.intents.entry(reply.classification.intent).or_insert(0) += 1;
    }

    pub fn record_feedback(&mut self, feedback: &Feedback) {
        self.feedback_count += 1;
        if let Some(rating) = feedback.rating {
            self.rating_sum += u64::from(rating);
            self.rating_count += 1;
        }
        if feedback.follow_up_asked == Some(true) {
            self.follow_ups += 1;
        }
        if feedback.activity_completed == Some(true) {
            self.activities_completed += 1;
        }
    }

    pub fn summary(&self) -> AnalyticsSummary {
        AnalyticsSummary {
            date: self.day.unwrap_or_else(|| Utc::now().date_naive()),
            total_queries: self.total_queries,
            unique_students: self.students.len(),
            avg_rating: ratio(self.rating_sum as f64, self.rating_count),
            avg_response_time_ms: ratio(self.total_generation_ms as f64, self.total_queries),
            follow_up_rate: ratio(self.follow_ups as f64, self.feedback_count),
            activity_completion_rate: ratio(self.activities_completed as f64, self.feedback_count),
            intent_distribution: self.intents.clone(),
        }
    }
}

fn ratio(numerator: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        numerator / count as f64
    }
}
