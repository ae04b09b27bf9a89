//! Answers report
//!
//! Renders a quiz and its responses as the plain text that gets shared or saved
//! as a `.txt` file:
//!
//! ```text
//! 1. What is 2+2?
//! Respuesta (b): 4
//!
//! 2. Capital of France?
//! Respuesta:
//!
//! ```
//!
//! A response resolves to its option letter by exact match; a response that
//! matches no option renders with the unresolved marker instead of a letter.
//! Serialization only: a report cannot be parsed back into a quiz.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::format::Format;
use crate::model::{option_letter, Quiz};

/// Wording of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRules {
    /// Label printed before each answer
    pub answer_label: String,

    /// Printed in place of the letter when the response matches no option
    pub unresolved_marker: char,
}

impl Default for ReportRules {
    fn default() -> Self {
        Self {
            answer_label: "Respuesta".to_string(),
            unresolved_marker: '?',
        }
    }
}

/// Build the report with the default wording.
pub fn build_quiz_content(quiz: &Quiz) -> String {
    build_quiz_content_with_rules(quiz, &ReportRules::default())
}

pub fn build_quiz_content_with_rules(quiz: &Quiz, rules: &ReportRules) -> String {
    let mut output = String::new();
    for (index, question) in quiz.questions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, question.text()));
        match quiz.response(index) {
            Some(response) => {
                let letter = question
                    .option_position(response)
                    .and_then(option_letter)
                    .unwrap_or(rules.unresolved_marker);
                output.push_str(&format!(
                    "{} ({letter}): {response}\n\n",
                    rules.answer_label
                ));
            }
            None => output.push_str(&format!("{}: \n\n", rules.answer_label)),
        }
    }
    output
}

/// Format implementation for answer reports
#[derive(Debug, Default)]
pub struct ReportFormat {
    rules: ReportRules,
}

impl ReportFormat {
    pub fn new(rules: ReportRules) -> Self {
        Self { rules }
    }
}

impl Format for ReportFormat {
    fn name(&self) -> &str {
        "report"
    }

    fn description(&self) -> &str {
        "Numbered questions with the selected answers"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, quiz: &Quiz) -> Result<String, FormatError> {
        Ok(build_quiz_content_with_rules(quiz, &self.rules))
    }
}
