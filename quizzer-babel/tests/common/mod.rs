//! Shared helpers for the integration suites.

use quizzer_babel::Question;
use std::path::PathBuf;

/// Read a file from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

pub fn question(text: &str, options: &[&str]) -> Question {
    Question::new(text, options.iter().map(|o| o.to_string()).collect())
}
