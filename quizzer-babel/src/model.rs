//! Quiz data model
//!
//! [`Question`] is immutable once built. [`Quiz`] is a plain record that callers
//! replace wholesale: taking a quiz produces new `responses`, editing produces a
//! new `name` and `questions`.

use serde::{Deserialize, Serialize};

/// Identifier assigned by a record store on first insert.
pub type QuizId = u64;

/// A prompt with its ordered, selectable options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Position of `answer` among the options, compared verbatim.
    pub fn option_position(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|option| option == answer)
    }

    /// Option addressed by its letter (`a` is the first option). Case-insensitive.
    pub fn option_by_letter(&self, letter: char) -> Option<&str> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let position = (letter as usize) - ('a' as usize);
        self.options.get(position).map(String::as_str)
    }
}

/// Letter for the option at `position`: 0 → `a`, 1 → `b`, …
///
/// Positions past `z` keep counting through the code points that follow, so the
/// letter is always derived from the position alone.
pub fn option_letter(position: usize) -> Option<char> {
    u32::try_from(position)
        .ok()
        .and_then(|offset| offset.checked_add(u32::from(b'a')))
        .and_then(char::from_u32)
}

/// A named quiz with the taker's recorded answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuizId>,
    #[serde(default)]
    pub name: String,
    pub questions: Vec<Question>,
    /// One slot per answered question; empty strings are unanswered questions.
    #[serde(default)]
    pub responses: Vec<String>,
}

impl Quiz {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: None,
            name: name.into(),
            questions,
            responses: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: QuizId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_responses(mut self, responses: Vec<String>) -> Self {
        self.responses = responses;
        self
    }

    /// The recorded answer for question `index`, if there is a non-blank one.
    pub fn response(&self, index: usize) -> Option<&str> {
        self.responses
            .get(index)
            .map(String::as_str)
            .filter(|response| !response.trim().is_empty())
    }

    pub fn answered_count(&self) -> usize {
        (0..self.questions.len())
            .filter(|&index| self.response(index).is_some())
            .count()
    }
}
