//! Round-trip properties: parse(generate(questions)) == questions

use proptest::prelude::*;
use quizzer_babel::formats::quiz::{
    generate_quiz_text, parse_quiz_text, parse_with_rules, EmptyQuestionPolicy, ParseRules,
};
use quizzer_babel::Question;

fn prompt() -> impl Strategy<Value = String> {
    "[A-Za-z0-9¿?][A-Za-z0-9¿?,.:() +-]{0,30}".prop_map(|s| s.trim_end().to_string())
}

// No `.` or `)` so an option can never begin with a letter label.
fn option_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9#][A-Za-z0-9#,:+ -]{0,20}".prop_map(|s| s.trim_end().to_string())
}

fn question() -> impl Strategy<Value = Question> {
    (prompt(), prop::collection::vec(option_text(), 1..6))
        .prop_map(|(text, options)| Question::new(text, options))
}

proptest! {
    #[test]
    fn generated_text_parses_back(questions in prop::collection::vec(question(), 0..8)) {
        let text = generate_quiz_text(&questions);
        prop_assert_eq!(parse_quiz_text(&text), questions);
    }

    #[test]
    fn keep_policy_round_trips_empty_questions(
        prompts in prop::collection::vec(prompt(), 1..5)
    ) {
        let rules = ParseRules {
            empty_questions: EmptyQuestionPolicy::Keep,
            ..ParseRules::default()
        };
        let questions: Vec<Question> =
            prompts.into_iter().map(|p| Question::new(p, Vec::new())).collect();
        let text = generate_quiz_text(&questions);
        prop_assert_eq!(parse_with_rules(&text, &rules), questions);
    }

    #[test]
    fn labelling_is_idempotent(questions in prop::collection::vec(question(), 1..6)) {
        let rules = ParseRules {
            label_options: true,
            ..ParseRules::default()
        };
        let labelled = parse_with_rules(&generate_quiz_text(&questions), &rules);
        let again = parse_with_rules(&generate_quiz_text(&labelled), &rules);
        prop_assert_eq!(again, labelled);
    }
}
