//! End-to-end tests for the tutor service with the offline generator.

use std::sync::Arc;
use std::thread;

use sahayak::classifier::{AgeGroup, Intent, Language, Subject};
use sahayak::config::SahayakConfig;
use sahayak::error::SahayakError;
use sahayak::generation::GenerationConfig;
use sahayak::tutor::{Feedback, TutorService};

fn service() -> TutorService {
    TutorService::from_config(&SahayakConfig::default()).unwrap()
}

#[test]
fn test_photosynthesis_reply() {
    let service = service();
    let reply = service
        .process_query("student-1", "Photosynthesis kya hai?")
        .unwrap();

    assert_eq!(reply.classification.intent, Intent::ConceptExplanation);
    assert_eq!(reply.classification.subject, Subject::Science);
    assert_eq!(reply.classification.language, Language::English);

    assert_eq!(reply.query.student_id, "student-1");
    assert_eq!(reply.query.query_text, "Photosynthesis kya hai?");
    assert_eq!(reply.query.detected_subject, Subject::Science);

    assert_eq!(reply.response.query_id, reply.query.id);
    assert_eq!(
        reply.response.template_used,
        "concept_explanation_hinglish_secondary"
    );
    assert!(
        reply
            .response
            .response_text
            .starts_with("Arre! Photosynthesis toh ekdum simple hai!")
    );
    assert_eq!(reply.response.tokens_used, 500);
}

#[test]
fn test_primary_reply_uses_exact_template() {
    let service = service();
    let reply = service.process_query("student-2", "why is the sky blue").unwrap();

    assert_eq!(reply.classification.age_group, AgeGroup::Primary);
    assert_eq!(
        reply.response.template_used,
        "concept_explanation_english_primary"
    );
    assert!(reply.response.response_text.contains("Sky blue kyun hai?"));
}

#[test]
fn test_configured_token_count() {
    let config = SahayakConfig {
        generation: GenerationConfig { canned_tokens: 12 },
        ..SahayakConfig::default()
    };
    let service = TutorService::from_config(&config).unwrap();
    let reply = service.process_query("s", "quiz").unwrap();
    assert_eq!(reply.response.tokens_used, 12);
}

#[test]
fn test_feedback_and_analytics() {
    let service = service();
    let first = service.process_query("asha", "ek kahani sunao").unwrap();
    let second = service.process_query("asha", "a quiz game").unwrap();
    let third = service.process_query("ravi", "algebra homework").unwrap();

    service
        .submit_feedback(
            Feedback::new(first.response.id)
                .with_rating(5)
                .with_follow_up(true)
                .with_comment("mast tha"),
        )
        .unwrap();
    service
        .submit_feedback(
            Feedback::new(second.response.id)
                .with_rating(3)
                .with_activity_completed(true),
        )
        .unwrap();

    let err = service
        .submit_feedback(Feedback::new(third.response.id).with_rating(0))
        .unwrap_err();
    assert!(matches!(err, SahayakError::InvalidArgument(_)));

    let summary = service.analytics();
    assert_eq!(summary.total_queries, 3);
    assert_eq!(summary.unique_students, 2);
    assert!((summary.avg_rating - 4.0).abs() < 1e-9);
    assert!((summary.follow_up_rate - 0.5).abs() < 1e-9);
    assert!((summary.activity_completion_rate - 0.5).abs() < 1e-9);
    assert_eq!(summary.intent_distribution.get(&Intent::Story), Some(&1));
    assert_eq!(summary.intent_distribution.get(&Intent::Fun), Some(&1));
    assert_eq!(summary.intent_distribution.get(&Intent::Homework), Some(&1));
}

#[test]
fn test_concurrent_queries_share_one_service() {
    let service = Arc::new(service());

    thread::scope(|scope| {
        for student in 0..4 {
            let service = Arc::clone(&service);
            scope.spawn(move || {
                for _ in 0..5 {
                    let reply = service
                        .process_query(&format!("student-{student}"), "what is gravity")
                        .unwrap();
                    assert_eq!(reply.classification.subject, Subject::Science);
                }
            });
        }
    });

    let summary = service.analytics();
    assert_eq!(summary.total_queries, 20);
    assert_eq!(summary.unique_students, 4);
    assert_eq!(
        summary.intent_distribution.get(&Intent::ConceptExplanation),
        Some(&20)
    );
}
