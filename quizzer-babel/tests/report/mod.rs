//! Report format tests

mod export;
