//! Import tests for quiz text (text → questions)

use crate::common::{fixture, question};
use quizzer_babel::format::Format;
use quizzer_babel::formats::quiz::{
    parse_quiz_text, parse_with_rules, EmptyQuestionPolicy, ParseRules, QuizTextFormat,
};
use quizzer_babel::FormatError;

#[test]
fn test_mixed_markers_fixture() {
    let questions = parse_quiz_text(&fixture("capitals.quiz"));
    assert_eq!(
        questions,
        vec![
            question("Capital of France?", &["Paris", "Lyon", "Marseille"]),
            question("Capital of Spain?", &["Madrid", "Barcelona"]),
            question("Capital of Italy?", &["Rome", "Milan"]),
        ]
    );
}

#[test]
fn test_noisy_fixture_drops_noise_and_empty_prompts() {
    let questions = parse_quiz_text(&fixture("noisy.quiz"));
    assert_eq!(
        questions,
        vec![
            question("What is 2+2?", &["3", "4", "5"]),
            question("Largest planet?", &["Jupiter", "Saturn"]),
        ]
    );
}

#[test]
fn test_noisy_fixture_with_keep_policy() {
    let rules = ParseRules {
        empty_questions: EmptyQuestionPolicy::Keep,
        ..ParseRules::default()
    };
    let questions = parse_with_rules(&fixture("noisy.quiz"), &rules);
    let prompts: Vec<&str> = questions.iter().map(|q| q.text()).collect();
    assert_eq!(
        prompts,
        vec!["What is 2+2?", "A prompt nobody answered", "Largest planet?"]
    );
    assert!(questions[1].options().is_empty());
}

#[test]
fn test_labelled_fixture() {
    let rules = ParseRules {
        label_options: true,
        ..ParseRules::default()
    };
    let questions = parse_with_rules(&fixture("capitals.quiz"), &rules);
    assert_eq!(
        questions[1],
        question("Capital of Spain?", &["a) Madrid", "b) Barcelona"])
    );
}

#[test]
fn test_prompt_count_matches_source() {
    let source = (1..=12)
        .map(|n| format!("{n}. Question {n}\n- yes\n- no\n"))
        .collect::<String>();
    let questions = parse_quiz_text(&source);
    assert_eq!(questions.len(), 12);
    for (index, q) in questions.iter().enumerate() {
        assert_eq!(q.text(), format!("Question {}", index + 1));
        assert_eq!(q.options(), ["yes", "no"]);
    }
}

#[test]
fn test_format_parse_without_prompts() {
    let result = QuizTextFormat::default().parse("- a\n- b\n");
    assert_eq!(result, Err(FormatError::NoQuestions));
}
