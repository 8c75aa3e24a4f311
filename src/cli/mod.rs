//! CLI module for moviedex
//!
//! Provides command-line interface for:
//! - serve: load the dataset and start the HTTP server
//! - query: one-shot query against a dataset file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{query, resolve_config, run_command, serve, QueryArgs, ServeOverrides};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
