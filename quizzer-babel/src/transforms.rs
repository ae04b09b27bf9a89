//! Transform-style helpers over the quiz text format
//!
//! Small functional wrappers for pipelines that only care about text in and
//! text out, such as the CLI `format` command or an editor "tidy" action.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::quiz::{ParseRules, QuizTextFormat};

/// Round-trip quiz text through the parser and serializer with default rules.
///
/// # Example
///
/// ```ignore
/// let tidy = format_quiz_source("1) Capital?\no Paris\no Lyon").unwrap();
/// assert_eq!(tidy, "# Capital?\n- Paris\n- Lyon");
/// ```
pub fn format_quiz_source(source: &str) -> Result<String, FormatError> {
    format_quiz_source_with_rules(source, ParseRules::default())
}

/// Round-trip quiz text using custom parse rules.
///
/// Fails with [`FormatError::NoQuestions`] when nothing in `source` parses.
pub fn format_quiz_source_with_rules(
    source: &str,
    rules: ParseRules,
) -> Result<String, FormatError> {
    let format = QuizTextFormat::new(rules);
    let quiz = format.parse(source)?;
    format.serialize(&quiz)
}
