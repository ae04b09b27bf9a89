use std::collections::BTreeMap;

use log::info;
use quizzer_babel::{Quiz, QuizId};

use crate::{QuizStore, StoreError};

/// In-memory records. Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    next_id: QuizId,
    quizzes: BTreeMap<QuizId, Quiz>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            quizzes: BTreeMap::new(),
        }
    }

    /// Rebuild a store from saved records. Records without an id are dropped;
    /// `next_id` is raised past the largest id present.
    pub fn from_records(next_id: QuizId, records: Vec<Quiz>) -> Self {
        let quizzes: BTreeMap<QuizId, Quiz> = records
            .into_iter()
            .filter_map(|quiz| quiz.id.map(|id| (id, quiz)))
            .collect();
        let floor = quizzes.keys().next_back().map_or(1, |id| id + 1);
        Self {
            next_id: next_id.max(floor),
            quizzes,
        }
    }

    pub fn next_id(&self) -> QuizId {
        self.next_id
    }

    pub fn records(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.values()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizStore for MemoryStore {
    fn insert(&mut self, quiz: &Quiz) -> Result<QuizId, StoreError> {
        if quiz.questions.is_empty() {
            return Err(StoreError::EmptyQuiz);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.quizzes.insert(id, quiz.clone().with_id(id));
        info!("inserted quiz {id} ({:?})", quiz.name);
        Ok(id)
    }

    fn update(&mut self, quiz: &Quiz) -> Result<bool, StoreError> {
        let id = quiz.id.ok_or(StoreError::Unsaved)?;
        if quiz.questions.is_empty() {
            return Err(StoreError::EmptyQuiz);
        }
        match self.quizzes.get_mut(&id) {
            Some(record) => {
                *record = quiz.clone();
                info!("updated quiz {id}");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: QuizId) -> Result<bool, StoreError> {
        let removed = self.quizzes.remove(&id).is_some();
        if removed {
            info!("deleted quiz {id}");
        }
        Ok(removed)
    }

    fn list_all(&self) -> Result<Vec<Quiz>, StoreError> {
        Ok(self.quizzes.values().cloned().collect())
    }

    fn get(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        Ok(self.quizzes.get(&id).cloned())
    }
}
