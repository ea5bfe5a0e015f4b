//! Backup config
//!

use core::time::Duration;
use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    request::{BackupRequest, DEFAULT_KEEP_BACKUPS, RequestError},
    runtime::{DEFAULT_DOCKER_BINARY, DockerRuntime},
    source::DockerPostgres,
};

/// The backup config. Every value is optional so a file and the command line can each supply
/// part of it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The directory to write backups to.
    pub backup_directory: Option<PathBuf>,

    /// The container the database runs in.
    pub container: Option<String>,

    /// The database to back up.
    pub database: Option<String>,

    /// The database user.
    pub user: Option<String>,

    /// The number of backups to keep.
    pub keep_backups: Option<usize>,

    /// The container runtime CLI.
    pub docker_binary: Option<String>,

    /// Timeout for each external command in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Tries to load a config from a toml file.
    pub fn load_toml(file_path: PathBuf) -> Result<Self, LoadConfigError> {
        if !file_path.exists() {
            return Err(LoadConfigError::NoFile(file_path));
        }

        let contents = fs::read_to_string(file_path).map_err(LoadConfigError::Read)?;
        let config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// A config to start from, written by `init`.
    pub fn template() -> Self {
        Self {
            backup_directory: Some(PathBuf::from("/var/backups/postgres")),
            container: Some("postgres".to_string()),
            database: Some("postgres".to_string()),
            user: Some("postgres".to_string()),
            keep_backups: Some(DEFAULT_KEEP_BACKUPS),
            docker_binary: Some(DEFAULT_DOCKER_BINARY.to_string()),
            timeout_secs: None,
        }
    }

    /// Values set in `overrides` replace values in `self`.
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            backup_directory: overrides.backup_directory.or(self.backup_directory),
            container: overrides.container.or(self.container),
            database: overrides.database.or(self.database),
            user: overrides.user.or(self.user),
            keep_backups: overrides.keep_backups.or(self.keep_backups),
            docker_binary: overrides.docker_binary.or(self.docker_binary),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
        }
    }

    /// The timeout for external commands.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The container runtime to probe.
    pub fn runtime(&self) -> DockerRuntime {
        DockerRuntime {
            binary: self.docker_binary(),
            timeout: self.timeout(),
        }
    }

    /// The validated backup request.
    pub fn request(&self) -> Result<BackupRequest, RequestError> {
        BackupRequest::new(
            self.backup_directory.clone(),
            self.container.clone(),
            self.database.clone(),
            self.user.clone(),
            self.keep_backups,
        )
    }

    /// The dump source for `request`.
    pub fn source(&self, request: &BackupRequest) -> DockerPostgres {
        DockerPostgres {
            docker_binary: self.docker_binary(),
            timeout: self.timeout(),
            ..DockerPostgres::new(&request.container, &request.user, &request.database)
        }
    }

    fn docker_binary(&self) -> String {
        self.docker_binary
            .clone()
            .unwrap_or_else(|| DEFAULT_DOCKER_BINARY.to_string())
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("The file {0:?} does not exist.")]
    NoFile(PathBuf),

    #[error("Failed to read the file:\n{0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to deserialize the file:\n{0}")]
    Deserialize(#[from] toml::de::Error),
}
