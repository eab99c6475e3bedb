// rehber - terminal browser for a company directory
//
// Layering:
// - rehber-types: Person / Department records as stored on disk
// - rehber-store: reads the JSON files once and answers lookups from memory
// - rehber-engine: joins people and departments into display rows
// - rehber-cli (this crate): config, logging, subcommands and the TUI
//
// All data is loaded and joined before the terminal is touched, so a broken
// data file is reported on stderr instead of inside a half-drawn screen.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod tui;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
