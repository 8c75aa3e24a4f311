//! CLI command implementations

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::http_server::{MovieServer, ServerConfig};
use crate::observability::Logger;
use crate::query::QueryEngine;

use super::args::Command;
use super::errors::CliResult;

/// Command line overrides for `serve`; these beat file and environment
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub dataset: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Filters given to `query`
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    pub genre: Option<String>,
    pub country: Option<String>,
    pub avg_vote: Option<String>,
}

impl QueryArgs {
    /// Same shape as a `/movie` query string
    fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("genre", self.genre.as_deref()),
            ("country", self.country.as_deref()),
            ("avg_vote", self.avg_vote.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            dataset,
            host,
            port,
        } => serve(
            config.as_deref(),
            ServeOverrides {
                dataset,
                host,
                port,
            },
        ),
        Command::Query {
            dataset,
            genre,
            country,
            avg_vote,
        } => {
            let args = QueryArgs {
                genre,
                country,
                avg_vote,
            };
            query(&dataset, &args, &mut io::stdout().lock()).map(|_| ())
        }
    }
}

/// Merge config file, environment and flags, then validate
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ServeOverrides,
) -> CliResult<ServerConfig> {
    let config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    let mut config = config.apply_env()?;

    if let Some(dataset) = overrides.dataset {
        config.dataset_path = dataset;
    }
    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Load the dataset and serve it until shutdown
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let config = resolve_config(config_path, overrides)?;
    Logger::info(
        "SERVER_STARTING",
        &[
            ("dataset", &config.dataset_path.display().to_string()),
            ("environment", config.environment.as_str()),
        ],
    );

    let catalog = Catalog::load(&config.dataset_path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(MovieServer::new(config, catalog).start())?;
    Ok(())
}

/// Run one query and write the matches as a JSON array to `out`.
///
/// Returns the number of matches.
pub fn query<W: Write>(dataset: &Path, args: &QueryArgs, out: &mut W) -> CliResult<usize> {
    let engine = QueryEngine::new(Catalog::load(dataset)?);
    let movies = engine.search(&args.pairs())?;

    serde_json::to_writer_pretty(&mut *out, &movies)?;
    writeln!(out)?;
    Ok(movies.len())
}
