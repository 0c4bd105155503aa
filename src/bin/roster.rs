//! roster client entry point
//!
//! Thin dispatcher for the companion client; all logic lives in the
//! client module.

use rosterdb::client;

fn main() {
    if let Err(e) = client::cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
