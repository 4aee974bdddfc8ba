use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use popcorn::api::OmdbClient;
use popcorn::commands::{self, Command};
use popcorn::config::Config;
use popcorn::logging;
use popcorn::ui;
use popcorn::watched::{FileStore, WatchedStore};

/// Search movies, rate them, and keep a list of what you have watched.
#[derive(Debug, Parser)]
#[command(name = "popcorn", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// OMDb API key (overrides config and OMDB_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Directory holding the watched list
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Log file for the interactive UI
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides();
    if let Some(key) = cli.api_key {
        config.api.api_key = key;
    }
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }

    let data_dir = config.storage.resolved_data_dir();
    let store = WatchedStore::new(
        Arc::new(FileStore::new(data_dir.clone())),
        config.storage.key.clone(),
    );

    match cli.command {
        Some(command) => {
            logging::init_tracing_stderr();
            let stdout = io::stdout();
            commands::execute(command, &config, &store, &mut stdout.lock())
        }
        None => {
            let log_path = cli
                .log_file
                .unwrap_or_else(|| data_dir.join("popcorn.log"));
            logging::init_tracing_to_file(&log_path)
                .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;
            config.require_api_key()?;
            let client = OmdbClient::new(&config.api)?;
            ui::run(config, client, store)
        }
    }
}
