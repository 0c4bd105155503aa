//! CLI module for the rosterdb server
//!
//! - init: create the data directory structure (and a default config file)
//! - serve: open the record store and serve the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve, Config};
pub use errors::{CliError, CliResult};
