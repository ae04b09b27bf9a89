use super::lines::{CHOICE_MARKER, PROMPT_MARKER};
use crate::model::Question;

/// Render questions in the canonical quiz text form.
///
/// ```text
/// # What is 2+2?
/// - 3
/// - 4
///
/// # Next question
/// - ...
/// ```
///
/// The output never ends in whitespace. Parsing it back with the same rules
/// reproduces the questions, as long as prompts and options are single-line and
/// options do not themselves start with a letter label such as `a) `.
pub fn generate_quiz_text(questions: &[Question]) -> String {
    let mut output = String::new();
    for question in questions {
        output.push_str(PROMPT_MARKER);
        output.push_str(question.text());
        output.push('\n');
        for option in question.options() {
            output.push_str(CHOICE_MARKER);
            output.push_str(option);
            output.push('\n');
        }
        output.push('\n');
    }
    output.truncate(output.trim_end().len());
    output
}
