//! Export tests for quiz text (questions → canonical text)

use crate::common::fixture;
use insta::assert_snapshot;
use quizzer_babel::format::Format;
use quizzer_babel::formats::quiz::{generate_quiz_text, parse_quiz_text, QuizTextFormat};
use quizzer_babel::transforms::format_quiz_source;

#[test]
fn test_canonical_fixture_is_stable() {
    let source = fixture("canonical.quiz");
    let generated = generate_quiz_text(&parse_quiz_text(&source));
    assert_eq!(generated, source.trim_end());
}

#[test]
fn test_mixed_markers_normalize() {
    let tidy = format_quiz_source(&fixture("capitals.quiz")).unwrap();
    assert_snapshot!(tidy, @r"
    # Capital of France?
    - Paris
    - Lyon
    - Marseille

    # Capital of Spain?
    - Madrid
    - Barcelona

    # Capital of Italy?
    - Rome
    - Milan
    ");
}

#[test]
fn test_serialize_ignores_name_and_responses() {
    let format = QuizTextFormat::default();
    let mut quiz = format.parse(&fixture("canonical.quiz")).unwrap();
    let plain = format.serialize(&quiz).unwrap();

    quiz.name = "Arithmetic".to_string();
    quiz.responses = vec!["4".to_string()];
    assert_eq!(format.serialize(&quiz).unwrap(), plain);
}
