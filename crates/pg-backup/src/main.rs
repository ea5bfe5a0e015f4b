//! # pg-backup
//! Back up a Postgres database running in a Docker container.
//!

use std::{fs, process::ExitCode};

use chrono::Local;
use clap::Parser;
use mimalloc::MiMalloc;
use pg_backup::{
    backup,
    cli::{Cli, Command},
    config::Config,
    context::Context,
    store::Directory,
};
use shared::init_logger;
use tracing::{Level, error, info};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let _logger = match init_logger(cli.log_directory.as_deref(), level) {
        Ok(guards) => guards,
        Err(error) => {
            eprintln!("Could not initialise logger: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Write a template config if asked to.
    if let Some(Command::Init { path }) = &cli.command {
        let contents = match toml::to_string_pretty(&Config::template()) {
            Ok(contents) => contents,
            Err(error) => {
                error!("Could not serialize config file: {error}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(error) = fs::write(path, contents) {
            error!("Could not create config file {path:?}: {error}");
            return ExitCode::FAILURE;
        }

        info!("Wrote config template to {path:?}");
        return ExitCode::SUCCESS;
    }

    // Load config
    let config = match &cli.config {
        Some(path) => match Config::load_toml(path.clone()) {
            Ok(config) => config,
            Err(error) => {
                error!("Could not load config: {error}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    }
    .merge(cli.overrides());

    let mut context = Context::new(
        config.database.as_deref().unwrap_or_default(),
        config.container.as_deref().unwrap_or_default(),
    );

    if let Err(error) = backup::preflight(&mut context, &config.runtime()) {
        error!("{context}{error}");
        return ExitCode::FAILURE;
    }

    let request = match config.request() {
        Ok(request) => request,
        Err(error) => {
            error!("{context}{error}");
            return ExitCode::FAILURE;
        }
    };

    let source = config.source(&request);
    let store = Directory::new(request.backup_directory.clone());
    let today = Local::now().date_naive();

    match backup::run(&mut context, &request, &source, &store, today) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{context}{error}");
            ExitCode::FAILURE
        }
    }
}
