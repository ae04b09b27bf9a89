//! Shared configuration loader for the quizzer toolchain.
//!
//! `defaults/quizzer.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuizzerConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use quizzer_babel::formats::quiz::{EmptyQuestionPolicy, ParseRules};
use quizzer_babel::formats::report::ReportRules;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/quizzer.default.toml");

/// Top-level configuration consumed by quizzer applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizzerConfig {
    pub parsing: ParsingConfig,
    pub report: ReportConfig,
    pub store: StoreConfig,
    pub export: ExportConfig,
}

/// Mirrors the knobs exposed by the quiz text parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub empty_questions: EmptyQuestionPolicy,
    pub label_options: bool,
}

impl From<ParsingConfig> for ParseRules {
    fn from(config: ParsingConfig) -> Self {
        ParseRules {
            empty_questions: config.empty_questions,
            label_options: config.label_options,
        }
    }
}

impl From<&ParsingConfig> for ParseRules {
    fn from(config: &ParsingConfig) -> Self {
        config.clone().into()
    }
}

/// Wording of shared / exported reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub answer_label: String,
    pub unresolved_marker: char,
}

impl From<ReportConfig> for ReportRules {
    fn from(config: ReportConfig) -> Self {
        ReportRules {
            answer_label: config.answer_label,
            unresolved_marker: config.unresolved_marker,
        }
    }
}

impl From<&ReportConfig> for ReportRules {
    fn from(config: &ReportConfig) -> Self {
        config.clone().into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QuizzerConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuizzerConfig, ConfigError> {
    Loader::new().build()
}
