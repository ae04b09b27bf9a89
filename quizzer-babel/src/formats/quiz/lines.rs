//! Line classification for quiz text
//!
//! Each trimmed, non-blank line is one of:
//!
//! | Kind   | Pattern                                   | Examples                     |
//! |--------|-------------------------------------------|------------------------------|
//! | Prompt | `#` or digits + `.`/`)`, then text        | `# Q`, `1. Q`, `2) Q`        |
//! | Choice | bullet (`-`, `•`, `o `), optional label   | `- A`, `• A`, `o A`, `- b) A`|
//! |        | bare letter label + whitespace            | `a) A`, `b. A`               |
//! | Noise  | anything else                             |                              |
//!
//! Prompts are tested first, so a line matching both is a prompt. A letter label
//! only counts as a label when whitespace follows it (`- a) x` → `x`, `- a.b` → `a.b`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::option_letter;

static PROMPT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:#|\d+[.)])\s*(.+)$").expect("prompt pattern compiles"));

static CHOICE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:[-•]|o\s)\s*(?:[a-zA-Z][.)]\s+)?|[a-zA-Z][.)]\s+)(.*)$")
        .expect("choice pattern compiles")
});

/// Marker the serializer writes before each prompt.
pub const PROMPT_MARKER: &str = "# ";

/// Marker the serializer writes before each option.
pub const CHOICE_MARKER: &str = "- ";

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Starts a new question; holds the trimmed prompt.
    Prompt(&'a str),
    /// An option for the pending question; holds the trimmed option text (may be empty).
    Choice(&'a str),
    /// Neither; ignored by the parser.
    Noise,
}

pub fn classify(line: &str) -> Line<'_> {
    if let Some(captures) = PROMPT_LINE.captures(line) {
        if let Some(prompt) = captures.get(1) {
            return Line::Prompt(prompt.as_str().trim());
        }
    }
    if let Some(captures) = CHOICE_LINE.captures(line) {
        if let Some(choice) = captures.get(1) {
            return Line::Choice(choice.as_str().trim());
        }
    }
    Line::Noise
}

/// Prefix `text` with the letter for `position` (`0, "Paris"` → `a) Paris`).
///
/// Only `a` to `z` are used; options past the 26th stay unlabelled, since the
/// choice pattern could not strip any other label again.
pub fn label_option(position: usize, text: &str) -> String {
    match option_letter(position).filter(char::is_ascii_lowercase) {
        Some(letter) => format!("{letter}) {text}"),
        None => text.to_string(),
    }
}
