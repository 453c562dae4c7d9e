//! Command-line interface
//!
//! A thin wrapper around the library: `check` establishes a session,
//! `mine` prints the result as JSON, `export` writes `<filename>.json`.

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
