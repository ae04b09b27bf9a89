//! Share / export pipeline.
//!
//! Provides a high-level API for rendering a quiz in some format and either
//! handing the text back (share) or writing it to a file (export). This module
//! bridges the gap between the format registry and file I/O.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::model::Quiz;
use crate::registry::FormatRegistry;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to publish a quiz.
///
/// ```ignore
/// let spec = ExportSpec::new(&quiz, "report")
///     .with_output_path(suggested_filename(&quiz.name));
/// ```
///
/// Without an output path the rendered text is returned in memory.
#[derive(Debug)]
pub struct ExportSpec<'a> {
    /// The quiz to render.
    pub quiz: &'a Quiz,
    /// Target format name (e.g., "report", "quiz", "json").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
}

impl<'a> ExportSpec<'a> {
    pub fn new(quiz: &'a Quiz, format: &'a str) -> Self {
        Self {
            quiz,
            format,
            output: None,
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output path).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Publishes a quiz with the default format registry.
pub fn publish(spec: ExportSpec<'_>) -> Result<PublishArtifact, FormatError> {
    publish_with(&FormatRegistry::with_defaults(), spec)
}

/// Publishes a quiz with the given registry (and therefore its rules).
///
/// # Errors
///
/// Returns [`FormatError`] if the format is unknown or cannot serialize, or if
/// writing the output file fails.
pub fn publish_with(
    registry: &FormatRegistry,
    spec: ExportSpec<'_>,
) -> Result<PublishArtifact, FormatError> {
    let text = registry.serialize(spec.quiz, spec.format)?;
    match spec.output {
        Some(path) => write_to_path(path, text).map(PublishArtifact::File),
        None => Ok(PublishArtifact::InMemory(text)),
    }
}

/// File name for exporting a quiz: its name with a `.txt` extension.
///
/// Path separators and control characters become `_`; a blank name becomes `quiz`.
pub fn suggested_filename(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim_matches('.');
    if stem.is_empty() {
        "quiz.txt".to_string()
    } else {
        format!("{stem}.txt")
    }
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    fs::write(&path, text.as_bytes())
        .map_err(|err| FormatError::SerializationError(format!("{}: {err}", path.display())))?;
    info!("wrote {}", path.display());
    Ok(path)
}
