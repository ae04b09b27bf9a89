//! Format implementations
//!
//! This module contains all format implementations that convert between
//! quizzes and their text representations.

pub mod json;
pub mod quiz;
pub mod report;

pub use json::JsonFormat;
pub use quiz::QuizTextFormat;
pub use report::ReportFormat;
