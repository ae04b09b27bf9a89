//! Quiz-taking state.
//!
//! A [`QuizSession`] walks a quiz one question at a time and records at most one
//! answer per question. It owns no I/O; front ends drive it and hand the finished
//! responses back to whatever stores the quiz.

use log::debug;
use thiserror::Error;

use crate::model::{Question, Quiz};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("quiz has no questions")]
    EmptyQuiz,
    #[error("'{0}' is not an option of the current question")]
    UnknownOption(String),
    #[error("no option labelled '{0}'")]
    UnknownLetter(char),
}

#[derive(Debug)]
pub struct QuizSession<'q> {
    quiz: &'q Quiz,
    index: usize,
    responses: Vec<Option<String>>,
}

impl<'q> QuizSession<'q> {
    /// Start at the first question with nothing answered.
    pub fn start(quiz: &'q Quiz) -> Result<Self, SessionError> {
        if quiz.questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }
        Ok(Self {
            quiz,
            index: 0,
            responses: vec![None; quiz.questions.len()],
        })
    }

    /// Start at the first question, keeping the quiz's recorded answers that
    /// still match an option.
    pub fn resume(quiz: &'q Quiz) -> Result<Self, SessionError> {
        let mut session = Self::start(quiz)?;
        for (index, question) in quiz.questions.iter().enumerate() {
            session.responses[index] = quiz
                .response(index)
                .filter(|response| question.option_position(response).is_some())
                .map(str::to_string);
        }
        Ok(session)
    }

    pub fn current(&self) -> &'q Question {
        &self.quiz.questions[self.index]
    }

    /// 0-based index of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiz.questions.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len()
    }

    /// The answer recorded for the current question.
    pub fn selected(&self) -> Option<&str> {
        self.responses[self.index].as_deref()
    }

    /// Record `option` for the current question. It must be one of its options.
    pub fn select(&mut self, option: &str) -> Result<(), SessionError> {
        if self.current().option_position(option).is_none() {
            return Err(SessionError::UnknownOption(option.to_string()));
        }
        self.responses[self.index] = Some(option.to_string());
        Ok(())
    }

    /// Record the option addressed by `letter` and return its text.
    pub fn select_letter(&mut self, letter: char) -> Result<&'q str, SessionError> {
        let option = self
            .current()
            .option_by_letter(letter)
            .ok_or(SessionError::UnknownLetter(letter))?;
        self.responses[self.index] = Some(option.to_string());
        Ok(option)
    }

    /// Clear the answer for the current question.
    pub fn skip(&mut self) {
        self.responses[self.index] = None;
    }

    /// Move to the next question. Returns false when already on the last one.
    pub fn next_question(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move to the previous question. Returns false when already on the first one.
    pub fn previous_question(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// One response per question; unanswered questions become empty strings.
    pub fn finish(self) -> Vec<String> {
        let responses: Vec<String> = self
            .responses
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        debug!(
            "finished quiz {:?}: {} of {} answered",
            self.quiz.name,
            responses.iter().filter(|r| !r.is_empty()).count(),
            responses.len()
        );
        responses
    }
}
