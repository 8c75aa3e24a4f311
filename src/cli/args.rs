//! CLI argument definitions using clap
//!
//! Commands:
//! - moviedex serve [--config <path>] [--dataset <path>] [--host <ip>] [--port <n>]
//! - moviedex query --dataset <path> [--genre <g>] [--country <c>] [--avg-vote <v>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// moviedex - authenticated query service over a static movie catalog
#[derive(Parser, Debug)]
#[command(name = "moviedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Movie dataset (JSON array)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one query against a dataset and print the matches as JSON
    Query {
        /// Movie dataset (JSON array)
        #[arg(long, default_value = "./data/movies-data-small.json")]
        dataset: PathBuf,

        /// Genre substring, case-insensitive
        #[arg(long)]
        genre: Option<String>,

        /// Country substring, case-insensitive
        #[arg(long)]
        country: Option<String>,

        /// Minimum average vote
        #[arg(long = "avg-vote")]
        avg_vote: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
