//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing quizzes.

use crate::error::FormatError;
use crate::model::Quiz;

/// Trait for quiz formats
///
/// Implementors provide conversion between a string representation and [`Quiz`].
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, quiz: &Quiz) -> Result<String, FormatError> {
///         Ok(quiz.name.clone())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "quiz", "report", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Quiz)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Quiz → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Quiz
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Quiz, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Quiz into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _quiz: &Quiz) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
