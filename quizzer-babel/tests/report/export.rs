//! Export tests for the answers report (quiz → report text)

use crate::common::{fixture, question};
use quizzer_babel::formats::report::{build_quiz_content_with_rules, ReportRules};
use quizzer_babel::publish::{publish, ExportSpec, PublishArtifact};
use quizzer_babel::{build_quiz_content, FormatRegistry, Quiz};

fn answered(responses: &[&str]) -> Quiz {
    let registry = FormatRegistry::default();
    let quiz = registry
        .parse(&fixture("capitals.quiz"), "quiz")
        .expect("fixture parses");
    quiz.with_responses(responses.iter().map(|r| r.to_string()).collect())
}

#[test]
fn test_two_plus_two_scenario() {
    let quiz = Quiz::new("math", vec![question("What is 2+2?", &["3", "4", "5"])])
        .with_responses(vec!["4".to_string()]);
    assert_eq!(
        build_quiz_content(&quiz),
        "1. What is 2+2?\nRespuesta (b): 4\n\n"
    );
}

#[test]
fn test_partial_answers_report() {
    let report = build_quiz_content(&answered(&["Lyon", "", "Rome"]));
    assert_eq!(
        report,
        "1. Capital of France?\nRespuesta (b): Lyon\n\n\
         2. Capital of Spain?\nRespuesta: \n\n\
         3. Capital of Italy?\nRespuesta (a): Rome\n\n"
    );
}

#[test]
fn test_short_response_list() {
    let report = build_quiz_content(&answered(&["Marseille"]));
    assert!(report.starts_with("1. Capital of France?\nRespuesta (c): Marseille\n\n"));
    assert!(report.contains("2. Capital of Spain?\nRespuesta: \n\n"));
    assert!(report.ends_with("3. Capital of Italy?\nRespuesta: \n\n"));
}

#[test]
fn test_unresolved_answer() {
    let rules = ReportRules {
        answer_label: "Answer".to_string(),
        unresolved_marker: '?',
    };
    let report = build_quiz_content_with_rules(&answered(&["Berlin"]), &rules);
    assert!(report.starts_with("1. Capital of France?\nAnswer (?): Berlin\n\n"));
}

#[test]
fn test_share_returns_report_in_memory() {
    let quiz = answered(&["Paris", "Madrid", "Milan"]);
    match publish(ExportSpec::new(&quiz, "report")).unwrap() {
        PublishArtifact::InMemory(text) => assert_eq!(text, build_quiz_content(&quiz)),
        PublishArtifact::File(_) => panic!("expected in-memory artifact"),
    }
}
