//! moodmatch-cli
//!
//! The outer collaborator around the engine: configuration, answer sheet
//! loading and the text report. `main.rs` wires these to the command line.

pub mod config;
pub mod report;
pub mod sheet;
