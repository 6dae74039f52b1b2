//! Scenario tests for rule-based query classification.

use sahayak::classifier::{
    AgeGroup, ClassificationResult, Complexity, DEFAULT_CONFIDENCE, Intent, Language,
    QueryClassifier, RuleBasedClassifier, Subject, classify,
};

fn words(count: usize) -> String {
    vec!["a"; count].join(" ")
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = RuleBasedClassifier::new();
    let queries = [
        "Photosynthesis kya hai?",
        "maths का answer क्या है",
        "गणित",
        "",
        "   ",
        "Ek kahani sunao about gravity and history",
        &words(30),
    ];

    for query in queries {
        assert_eq!(classifier.classify(query), classifier.classify(query));
        assert_eq!(classify(query), classifier.classify(query));
    }
}

#[test]
fn test_intent_defaults_without_keywords() {
    let result = classify("hello there friend");
    assert_eq!(result.intent, Intent::ConceptExplanation);
    assert_eq!(result.subject, Subject::General);
}

#[test]
fn test_intent_tie_goes_to_first_declared() {
    // One story keyword, one doubt keyword.
    assert_eq!(classify("story help").intent, Intent::Story);
    // One doubt keyword, one practice keyword.
    assert_eq!(classify("stuck on exercise").intent, Intent::Doubt);
    // A strictly higher score wins regardless of order.
    assert_eq!(
        classify("story, but I am stuck and confused").intent,
        Intent::Doubt
    );
}

#[test]
fn test_subject_scoring() {
    assert_eq!(classify("hindi poem").subject, Subject::Hindi);
    // "maths" matches both "math" and "maths".
    assert_eq!(classify("maths and science").subject, Subject::Math);
    assert_eq!(classify("science and math").subject, Subject::Math);
    assert_eq!(classify("physics experiment").subject, Subject::Science);
    assert_eq!(classify("history of civics").subject, Subject::Social);
}

#[test]
fn test_language_detection_by_script() {
    assert_eq!(
        classify("maths का answer क्या है").language,
        Language::Hinglish
    );
    assert_eq!(classify("क्या है maths").language, Language::Hinglish);
    assert_eq!(classify("गणित क्या है").language, Language::Hindi);
    assert_eq!(
        classify("maths ka answer kya hai").language,
        Language::English
    );
}

#[test]
fn test_age_group_word_count_boundaries() {
    assert_eq!(classify(&words(7)).age_group, AgeGroup::Primary);
    assert_eq!(classify(&words(8)).age_group, AgeGroup::Secondary);
    assert_eq!(classify(&words(15)).age_group, AgeGroup::Secondary);
    assert_eq!(classify(&words(16)).age_group, AgeGroup::Senior);
}

#[test]
fn test_edge_whitespace_counts_as_words() {
    // Seven words plus a trailing space split into eight words.
    assert_eq!(classify(&words(7)).age_group, AgeGroup::Primary);
    assert_eq!(
        classify(&format!("{} ", words(7))).age_group,
        AgeGroup::Secondary
    );
    assert_eq!(
        classify(&format!(" {}", words(7))).age_group,
        AgeGroup::Secondary
    );

    // Fifteen words plus a trailing newline split into sixteen.
    assert_eq!(
        classify(&format!("{}\n", words(15))).age_group,
        AgeGroup::Senior
    );

    // Twenty words with whitespace on both edges split into twenty-two.
    let result = classify(&format!("  {}\n", words(20)));
    assert_eq!(result.age_group, AgeGroup::Senior);
    assert_eq!(result.complexity, Complexity::Hard);
}

#[test]
fn test_age_group_word_length_and_vocabulary() {
    // Average word length of 5 or more is not Primary.
    assert_eq!(classify("hello world").age_group, AgeGroup::Secondary);
    assert_eq!(classify("what is a cat").age_group, AgeGroup::Primary);
    // Complex vocabulary forces Senior even in short queries.
    assert_eq!(classify("an equation").age_group, AgeGroup::Senior);
    assert_eq!(classify("MITOCHONDRIA").age_group, AgeGroup::Senior);
}

#[test]
fn test_complexity_boundaries() {
    let result = classify(&words(21));
    assert_eq!(result.age_group, AgeGroup::Senior);
    assert_eq!(result.complexity, Complexity::Hard);

    let result = classify(&words(20));
    assert_eq!(result.age_group, AgeGroup::Senior);
    assert_eq!(result.complexity, Complexity::Medium);

    assert_eq!(classify(&words(3)).complexity, Complexity::Easy);
    assert_eq!(classify(&words(10)).complexity, Complexity::Medium);
}

#[test]
fn test_blank_queries_get_documented_defaults() {
    for query in ["", " ", "\t\n"] {
        assert_eq!(classify(query), ClassificationResult::default());
    }
}

#[test]
fn test_photosynthesis_end_to_end() {
    let result = classify("Photosynthesis kya hai?");
    assert_eq!(result.intent, Intent::ConceptExplanation);
    assert_eq!(result.subject, Subject::Science);
    // Romanised Hindi carries no Devanagari codepoints.
    assert_eq!(result.language, Language::English);
    assert_eq!(result.age_group, AgeGroup::Senior);
    assert_eq!(result.complexity, Complexity::Medium);
    assert_eq!(result.confidence, DEFAULT_CONFIDENCE);
}

#[test]
fn test_devanagari_only_query() {
    let result = classify("कहानी सुनाओ");
    assert_eq!(result.language, Language::Hindi);
    // Keywords are romanised, so a Devanagari request falls back.
    assert_eq!(result.intent, Intent::ConceptExplanation);
    // Ten characters over two words averages exactly 5.
    assert_eq!(result.age_group, AgeGroup::Secondary);
}

#[test]
fn test_emoji_measured_in_utf16_units() {
    // Each emoji is two UTF-16 units, so three of them average six.
    assert_eq!(classify("🌱🌱🌱").age_group, AgeGroup::Secondary);
    assert_eq!(classify("🌱 🌱").age_group, AgeGroup::Primary);
}
