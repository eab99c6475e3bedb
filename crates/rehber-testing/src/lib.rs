//! Testing infrastructure for rehber integration tests.
//!
//! - `TestWorld`: isolated data directory, log file and config per test
//! - `fixtures`: sample `people.json` / `departments.json` documents
//! - `assertions`: checks on CLI output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
