//! Container runtime liveness.
//!

use core::time::Duration;
use std::process::Command;

use tracing::debug;

use crate::command;

/// The default container runtime CLI.
pub const DEFAULT_DOCKER_BINARY: &str = "docker";

/// Checks that a container runtime can be reached.
pub trait RuntimeProbe {
    /// If the runtime answered a harmless query successfully.
    fn is_available(&self) -> bool;
}

/// Probes a Docker compatible CLI with `<binary> images`.
#[derive(Debug, Clone)]
pub struct DockerRuntime {
    /// The runtime CLI to invoke.
    pub binary: String,
    /// How long the probe may take.
    pub timeout: Option<Duration>,
}

impl Default for DockerRuntime {
    fn default() -> Self {
        Self {
            binary: DEFAULT_DOCKER_BINARY.to_string(),
            timeout: None,
        }
    }
}

impl RuntimeProbe for DockerRuntime {
    fn is_available(&self) -> bool {
        let output = match command::run(Command::new(&self.binary).arg("images"), self.timeout) {
            Ok(output) => output,
            Err(error) => {
                debug!("Runtime probe '{}' failed: {error}", self.binary);
                return false;
            }
        };

        if !output.status.success() {
            debug!(
                "Runtime probe '{}' exited with {}: {}",
                self.binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return false;
        }

        true
    }
}
