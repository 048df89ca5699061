//! moodmatch-core
//!
//! Pure domain types shared by the questionnaire, ranking and CLI crates.
//! No I/O; this is the vocabulary of answers, sessions and results.

pub mod error;
pub mod models;
