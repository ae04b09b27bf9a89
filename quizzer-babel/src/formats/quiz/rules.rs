use serde::{Deserialize, Serialize};

/// What to do with a prompt that collected no options before the next prompt
/// (or the end of input).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyQuestionPolicy {
    /// Silently drop the prompt
    #[default]
    Drop,
    /// Emit the question with no options
    Keep,
}

/// Configuration for the quiz text parser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRules {
    /// Handling of prompts without options
    pub empty_questions: EmptyQuestionPolicy,

    /// Whether to prefix every option with its letter (`a) `, `b) `, …)
    pub label_options: bool,
}
