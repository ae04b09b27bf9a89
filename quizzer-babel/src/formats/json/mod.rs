//! JSON format implementation
//!
//! The whole quiz record (`id`, `name`, `questions`, `responses`) as JSON, the
//! same shape quizzer-store persists. Useful for moving a quiz between stores or
//! inspecting one with external tools.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Quiz;

/// Format implementation for JSON quiz records
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Quiz record as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Quiz, FormatError> {
        let quiz: Quiz =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        if quiz.questions.is_empty() {
            return Err(FormatError::NoQuestions);
        }
        Ok(quiz)
    }

    fn serialize(&self, quiz: &Quiz) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(quiz)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}
