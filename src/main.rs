//! moviedex CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and exits non-zero on
//! failure. All logic lives in `cli`.

use moviedex::cli;
use moviedex::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal("CLI_FAILED", &[("code", e.code()), ("error", &e.to_string())]);
        std::process::exit(1);
    }
}
