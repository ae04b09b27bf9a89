//! Quiz text interoperability for quizzer
//!
//!     This crate converts between loosely formatted quiz text and the structured
//!     [`Quiz`]/[`Question`] model, and renders answered quizzes as shareable reports.
//!
//!     This is a pure lib: it powers quizzer-cli but assumes no shell. Nothing here
//!     reads env vars or prints; the only file I/O is the optional output path in
//!     [`publish`].
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── model.rs                # Question / Quiz
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # Share / export pipeline
//!     ├── session.rs              # Quiz-taking state
//!     ├── transforms.rs           # Canonicalization helpers
//!     └── formats
//!         ├── quiz                # Free text <-> questions
//!         │   ├── lines.rs        # Line classification
//!         │   ├── parser.rs
//!         │   ├── serializer.rs
//!         │   └── rules.rs
//!         ├── report              # Answers report (serialize only)
//!         └── json                # Whole-record JSON
//!
//! Core Algorithms
//!
//!     The quiz text grammar is line oriented. Every non-blank line is classified as a
//!     prompt (`# ...`, `1. ...`, `2) ...`), an option (`- ...`, `• ...`, `o ...`, `a) ...`)
//!     or noise. Prompt classification always wins over option classification. Options
//!     attach to the most recent prompt; options seen before any prompt are dropped.
//!
//!     Parsing never fails. An empty question list is the one signal that nothing
//!     usable was found, and callers decide what that means (the `quiz` format turns it
//!     into [`FormatError::NoQuestions`]).
//!
//!     Serialization always emits the canonical form (`# prompt`, `- option`, blank line
//!     between questions), which parses back to the same questions.
//!
//! Formats
//!
//!     - quiz:   free text in, canonical text out
//!     - report: numbered questions with the selected answer and its option letter
//!     - json:   the full quiz record, as stored by quizzer-store
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod publish;
pub mod registry;
pub mod session;
pub mod transforms;

pub use error::FormatError;
pub use format::Format;
pub use formats::quiz::{generate_quiz_text, parse_quiz_text};
pub use formats::report::build_quiz_content;
pub use model::{Question, Quiz, QuizId};
pub use registry::FormatRegistry;
