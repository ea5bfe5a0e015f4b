//! Running external commands.
//!

use core::time::Duration;
use std::{
    io::{self, Read},
    process::{Child, Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
    time::Instant,
};

use thiserror::Error;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The captured result of a finished command.
#[derive(Debug)]
pub struct CommandOutput {
    /// How the command exited.
    pub status: ExitStatus,
    /// Everything the command wrote to stdout.
    pub stdout: Vec<u8>,
    /// Everything the command wrote to stderr.
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Stdout followed by stderr.
    pub fn combined(&self) -> Vec<u8> {
        let mut combined = Vec::with_capacity(self.stdout.len() + self.stderr.len());
        combined.extend_from_slice(&self.stdout);
        combined.extend_from_slice(&self.stderr);
        combined
    }
}

/// Run a command to completion, capturing its output.
///
/// With a `timeout` the child is killed once the timeout elapses. Without one this blocks until
/// the child exits.
pub fn run(command: &mut Command, timeout: Option<Duration>) -> Result<CommandOutput, CommandError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!("Running {command:?}");

    let Some(timeout) = timeout else {
        let output = command.output().map_err(CommandError::Spawn)?;
        return Ok(CommandOutput {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    };

    let mut child = command.spawn().map_err(CommandError::Spawn)?;

    // Drain both pipes while waiting so a chatty child can't block on a full pipe.
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match wait_until(&mut child, Instant::now() + timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            // The child may exit between the last poll and the kill.
            let _ = child.kill();
            let _ = child.wait();
            // Grandchildren can keep the pipes open, leave the readers detached.
            drop((stdout, stderr));
            return Err(CommandError::TimedOut(timeout));
        }
        Err(error) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(CommandError::Wait(error));
        }
    };

    Ok(CommandOutput {
        status,
        stdout: join(stdout)?,
        stderr: join(stderr)?,
    })
}

fn wait_until(child: &mut Child, deadline: Instant) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }

        if Instant::now() >= deadline {
            return Ok(None);
        }

        thread::sleep(POLL_INTERVAL);
    }
}

type Drain = Option<JoinHandle<io::Result<Vec<u8>>>>;

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Drain {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            pipe.read_to_end(&mut buffer)?;
            Ok(buffer)
        })
    })
}

fn join(drain: Drain) -> Result<Vec<u8>, CommandError> {
    let Some(handle) = drain else {
        return Ok(Vec::new());
    };

    match handle.join() {
        Ok(result) => result.map_err(CommandError::ReadOutput),
        Err(_) => Err(CommandError::ReadOutput(io::Error::other(
            "output reader panicked",
        ))),
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to spawn command:\n{0}")]
    Spawn(#[source] io::Error),

    #[error("Failed to wait for command:\n{0}")]
    Wait(#[source] io::Error),

    #[error("Failed to read command output:\n{0}")]
    ReadOutput(#[source] io::Error),

    #[error("Command did not finish within {0:?}")]
    TimedOut(Duration),
}
