//! JSON file persistence.
//!
//! The whole store lives in one file:
//!
//! ```json
//! {
//!   "version": 1,
//!   "next_id": 3,
//!   "quizzes": [
//!     { "id": 1, "name": "geo", "questions": [{ "text": "..", "options": [".."] }], "responses": [""] }
//!   ]
//! }
//! ```
//!
//! Every mutation rewrites the file through a temporary file in the same
//! directory, so a crash never leaves a half-written store behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use quizzer_babel::{Quiz, QuizId};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::memory::MemoryStore;
use crate::{QuizStore, StoreError};

pub const STORE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    next_id: QuizId,
    quizzes: Vec<Quiz>,
}

/// A [`MemoryStore`] mirrored to a JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; the file is
    /// only created by the first mutation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&raw)?;
            if file.version != STORE_VERSION {
                return Err(StoreError::UnsupportedVersion {
                    path,
                    found: file.version,
                    expected: STORE_VERSION,
                });
            }
            debug!("loaded {} quiz(zes) from {}", file.quizzes.len(), path.display());
            MemoryStore::from_records(file.next_id, file.quizzes)
        } else {
            debug!("no store at {}, starting empty", path.display());
            MemoryStore::new()
        };
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the records, write the copy, and only then
    /// adopt it. A failed write leaves both the file and the records untouched.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
        changed: impl FnOnce(&T) -> bool,
    ) -> Result<T, StoreError> {
        let mut staged = self.records.clone();
        let outcome = change(&mut staged)?;
        if changed(&outcome) {
            self.save(&staged)?;
            self.records = staged;
        }
        Ok(outcome)
    }

    fn save(&self, records: &MemoryStore) -> Result<(), StoreError> {
        let file = StoreFile {
            version: STORE_VERSION,
            next_id: records.next_id(),
            quizzes: records.records().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path).map_err(|err| StoreError::Persist {
            path: self.path.clone(),
            source: err.error,
        })?;
        debug!("saved store to {}", self.path.display());
        Ok(())
    }
}

impl QuizStore for JsonFileStore {
    fn insert(&mut self, quiz: &Quiz) -> Result<QuizId, StoreError> {
        self.commit(|records| records.insert(quiz), |_| true)
    }

    fn update(&mut self, quiz: &Quiz) -> Result<bool, StoreError> {
        self.commit(|records| records.update(quiz), |updated| *updated)
    }

    fn delete(&mut self, id: QuizId) -> Result<bool, StoreError> {
        self.commit(|records| records.delete(id), |deleted| *deleted)
    }

    fn list_all(&self) -> Result<Vec<Quiz>, StoreError> {
        self.records.list_all()
    }

    fn get(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        self.records.get(id)
    }
}
