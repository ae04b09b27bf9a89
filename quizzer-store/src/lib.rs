//! Record store for quizzer.
//!
//! Quizzes are whole records keyed by an integer id. The store assigns the id
//! on [`QuizStore::insert`]; every later change replaces the record through
//! [`QuizStore::update`]. Two implementations:
//!
//! - [`MemoryStore`]: records in a `BTreeMap`, for tests and short-lived tools
//! - [`JsonFileStore`]: the same records persisted to a JSON file after every
//!   mutation
//!
//! Neither accepts a quiz with zero questions.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use quizzer_babel::{Quiz, QuizId};

/// Persistence for quiz records.
pub trait QuizStore {
    /// Store a new quiz and return its id. Any id already set on `quiz` is ignored.
    fn insert(&mut self, quiz: &Quiz) -> Result<QuizId, StoreError>;

    /// Replace the record with `quiz.id`. Returns false if no such record exists.
    fn update(&mut self, quiz: &Quiz) -> Result<bool, StoreError>;

    /// Remove a record. Returns false if no such record exists.
    fn delete(&mut self, id: QuizId) -> Result<bool, StoreError>;

    /// All records, ordered by id.
    fn list_all(&self) -> Result<Vec<Quiz>, StoreError>;

    fn get(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        Ok(self
            .list_all()?
            .into_iter()
            .find(|quiz| quiz.id == Some(id)))
    }
}
