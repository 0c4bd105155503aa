//! rosterdb server entry point
//!
//! This is a minimal entrypoint that parses CLI arguments, dispatches to
//! the CLI commands, prints errors to stderr, and exits non-zero on
//! failure. All logic is delegated to the CLI module.

use rosterdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
