//! Library side of the quizzer binary: pieces that are easier to test without a
//! terminal.

pub mod take;
