//! Command line arguments.
//!

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Back up a Postgres database running in a Docker container.
#[derive(Debug, Parser)]
#[command(name = "pg-backup", version, about)]
pub struct Cli {
    /// The subcommand to run instead of a backup.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory to store backups in
    #[arg(long = "backup-dir", value_name = "PATH")]
    pub backup_directory: Option<PathBuf>,

    /// Docker container id or name
    #[arg(long = "db-container", value_name = "NAME")]
    pub container: Option<String>,

    /// Database name
    #[arg(long = "db-name", value_name = "NAME")]
    pub database: Option<String>,

    /// Database user
    #[arg(long = "db-user", value_name = "USER")]
    pub user: Option<String>,

    /// Number of last backups to keep [default: 2]
    #[arg(long = "keep-backups", value_name = "N")]
    pub keep_backups: Option<usize>,

    /// Container runtime CLI [default: docker]
    #[arg(long = "docker-bin", value_name = "PATH")]
    pub docker_binary: Option<String>,

    /// Timeout for each external command in seconds
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// TOML file to read values from, flags take precedence
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long = "log-dir", value_name = "PATH")]
    pub log_directory: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a template config file
    Init {
        /// Where to write the config
        #[arg(default_value = "config.toml")]
        path: PathBuf,
    },
}

impl Cli {
    /// The values given on the command line.
    pub fn overrides(&self) -> Config {
        Config {
            backup_directory: self.backup_directory.clone(),
            container: self.container.clone(),
            database: self.database.clone(),
            user: self.user.clone(),
            keep_backups: self.keep_backups,
            docker_binary: self.docker_binary.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
