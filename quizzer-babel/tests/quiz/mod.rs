//! Quiz text format tests
//!
//! Tests for free text → questions and questions → canonical text.

mod export;
mod import;
mod roundtrip;
