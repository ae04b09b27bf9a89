//! Quiz text format implementation
//!
//! The loosely structured text users paste in, and the canonical text quizzer writes
//! back out for editing.
//!
//! # Grammar
//!
//! See [`lines`] for the line classes. Parsing is a single pass over classified
//! lines (see [`parser`]); serialization always uses `# ` prompts and `- ` options
//! (see [`serializer`]).
//!
//! # Lossy Conversions
//!
//! - Prompt and option markers collapse to `#` and `-`
//! - Noise lines, blank lines and indentation are dropped
//! - Prompts without options are dropped under the default rules
//! - The quiz name and responses are not part of the text
//! - An option whose own text starts with a letter label (`a) x`) loses the label
//!   on re-parse

pub mod lines;
pub mod parser;
pub mod rules;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Quiz;

pub use parser::{parse_quiz_text, parse_with_rules};
pub use rules::{EmptyQuestionPolicy, ParseRules};
pub use serializer::generate_quiz_text;

/// Format implementation for quiz text
#[derive(Debug, Default)]
pub struct QuizTextFormat {
    rules: ParseRules,
}

impl QuizTextFormat {
    pub fn new(rules: ParseRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ParseRules {
        &self.rules
    }
}

impl Format for QuizTextFormat {
    fn name(&self) -> &str {
        "quiz"
    }

    fn description(&self) -> &str {
        "Free-form quiz text (# prompt / - option)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["quiz"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Quiz, FormatError> {
        let questions = parse_with_rules(source, &self.rules);
        if questions.is_empty() {
            return Err(FormatError::NoQuestions);
        }
        Ok(Quiz::new(String::new(), questions))
    }

    fn serialize(&self, quiz: &Quiz) -> Result<String, FormatError> {
        Ok(generate_quiz_text(&quiz.questions))
    }
}
