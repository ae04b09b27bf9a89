//! Quiz text parser
//!
//! Walks the classified lines keeping one pending prompt and the options gathered
//! for it. A new prompt (or the end of input) closes the pending question out,
//! applying [`ParseRules`] for empty questions and option labels.

use log::{debug, trace};

use super::lines::{classify, label_option, Line};
use super::rules::{EmptyQuestionPolicy, ParseRules};
use crate::model::Question;

/// Parse quiz text with the default rules.
pub fn parse_quiz_text(source: &str) -> Vec<Question> {
    parse_with_rules(source, &ParseRules::default())
}

/// Parse quiz text into questions, in source order.
///
/// Never fails: unrecognized lines are skipped and an input without prompts
/// yields an empty list.
pub fn parse_with_rules(source: &str, rules: &ParseRules) -> Vec<Question> {
    let mut builder = QuestionBuilder::new(rules);

    for line in source.split(['\n', '\r']).map(str::trim).filter(|line| !line.is_empty()) {
        match classify(line) {
            Line::Prompt(prompt) => builder.start(prompt),
            Line::Choice(choice) => builder.push_option(choice),
            Line::Noise => trace!("ignoring unrecognized line {line:?}"),
        }
    }

    builder.finish()
}

struct QuestionBuilder<'r> {
    rules: &'r ParseRules,
    questions: Vec<Question>,
    prompt: Option<String>,
    options: Vec<String>,
}

impl<'r> QuestionBuilder<'r> {
    fn new(rules: &'r ParseRules) -> Self {
        Self {
            rules,
            questions: Vec::new(),
            prompt: None,
            options: Vec::new(),
        }
    }

    fn start(&mut self, prompt: &str) {
        self.close_pending();
        self.prompt = Some(prompt.to_string());
    }

    fn push_option(&mut self, option: &str) {
        if option.is_empty() {
            return;
        }
        if self.prompt.is_none() {
            trace!("dropping option {option:?} seen before any prompt");
            return;
        }
        self.options.push(option.to_string());
    }

    fn close_pending(&mut self) {
        let options = std::mem::take(&mut self.options);
        let Some(prompt) = self.prompt.take() else {
            return;
        };

        if options.is_empty() && self.rules.empty_questions == EmptyQuestionPolicy::Drop {
            debug!("dropping prompt {prompt:?}: no options");
            return;
        }

        let options = if self.rules.label_options {
            options
                .iter()
                .enumerate()
                .map(|(position, option)| label_option(position, option))
                .collect()
        } else {
            options
        };

        self.questions.push(Question::new(prompt, options));
    }

    fn finish(mut self) -> Vec<Question> {
        self.close_pending();
        debug!("parsed {} question(s)", self.questions.len());
        self.questions
    }
}
