//! flightdb CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments and runs the pipeline (via cli::run)
//! 2. Prints errors to stderr
//! 3. Exits with the error's exit code on failure
//!
//! All logic is delegated to the CLI module.

use flightdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
