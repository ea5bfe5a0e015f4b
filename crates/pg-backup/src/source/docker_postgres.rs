use core::time::Duration;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::warn;

use super::DumpSource;
use crate::{
    command::{self, CommandError},
    runtime::DEFAULT_DOCKER_BINARY,
};

/// Make a backup from a postgres docker container.
#[derive(Debug, Clone)]
pub struct DockerPostgres {
    /// The container runtime CLI.
    pub docker_binary: String,
    /// The name of the container.
    pub container_name: String,
    /// The postgres username.
    pub postgres_username: String,
    /// The postgres database.
    pub postgres_database: String,
    /// How long the dump may take.
    pub timeout: Option<Duration>,
}

impl DockerPostgres {
    /// Dump `database` as `username` from `container_name` using the default runtime.
    pub fn new(container_name: &str, postgres_username: &str, postgres_database: &str) -> Self {
        Self {
            docker_binary: DEFAULT_DOCKER_BINARY.to_string(),
            container_name: container_name.to_string(),
            postgres_username: postgres_username.to_string(),
            postgres_database: postgres_database.to_string(),
            timeout: None,
        }
    }

    /// The command this source runs.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.docker_binary);
        command.args([
            "exec",
            &self.container_name,
            "pg_dump",
            "-U",
            &self.postgres_username,
            "-d",
            &self.postgres_database,
        ]);
        command
    }
}

impl DumpSource for DockerPostgres {
    type Error = DockerPostgresError;

    fn dump(&self) -> Result<Vec<u8>, Self::Error> {
        let output = command::run(&mut self.command(), self.timeout)?;

        if !output.status.success() {
            let output_text = String::from_utf8_lossy(&output.combined()).trim().to_string();
            return Err(DockerPostgresError::CommandErrored(output.status, output_text));
        }

        if !output.stderr.is_empty() {
            warn!(
                "pg_dump wrote to stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.combined())
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DockerPostgresError {
    #[error("Failed to run command:\n{0}")]
    RunCommand(#[from] CommandError),

    #[error("Command exited with {0}. Check if the container is up and running:\n{1}")]
    CommandErrored(ExitStatus, String),
}
