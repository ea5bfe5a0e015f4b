//! Making a backup.
//!

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    Backup, cleanup,
    context::Context,
    request::BackupRequest,
    runtime::RuntimeProbe,
    source::DumpSource,
    store::{BackupStore, StoreError},
};

/// The outcome of a successful backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Where the backup was written.
    pub path: PathBuf,
    /// The size of the backup in bytes.
    pub bytes: usize,
    /// The old backups that were removed, oldest first.
    pub removed: Vec<String>,
}

/// Fail fast if the container runtime can't be reached.
pub fn preflight<Probe: RuntimeProbe + ?Sized>(
    context: &mut Context,
    probe: &Probe,
) -> Result<(), BackupError> {
    context.current_context = "Preflight";

    if !probe.is_available() {
        return Err(BackupError::RuntimeUnavailable);
    }

    info!("{context}Container runtime is available");
    Ok(())
}

/// Dump, write, then clean up old backups.
///
/// Each step runs only if the previous succeeded. Nothing is rolled back: a failed write leaves
/// whatever was written, a failed cleanup leaves the files it already removed.
pub fn run<Source, Store>(
    context: &mut Context,
    request: &BackupRequest,
    source: &Source,
    store: &Store,
    date: NaiveDate,
) -> Result<BackupReport, BackupError>
where
    Source: DumpSource + ?Sized,
    Store: BackupStore + ?Sized,
{
    // Dump
    context.current_context = "Dump";
    info!(
        "{context}Creating backup of '{}' in container '{}'",
        request.database, request.container
    );
    let contents = source
        .dump()
        .map_err(|error| BackupError::Dump(Box::new(error)))?;
    let backup = Backup::new(&request.database, date, contents);

    // Write
    context.current_context = "Write";
    let path = store
        .write(&backup.file_name, &backup.contents)
        .map_err(BackupError::Write)?;
    info!("{context}Backup saved to: {path:?}");

    // Cleanup
    context.current_context = "Cleanup";
    let removed = match cleanup::prune(store, &request.database, request.keep_backups) {
        Ok(removed) => removed,
        Err(error) => {
            warn!("{context}Backup was saved but old backups may remain");
            return Err(BackupError::Cleanup(error));
        }
    };
    info!(
        "{context}Backup completed, {} older backups cleared",
        removed.len()
    );

    Ok(BackupReport {
        path,
        bytes: backup.contents.len(),
        removed,
    })
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Container runtime is unavailable. Please install and start the Docker daemon and try again.")]
    RuntimeUnavailable,

    #[error("Failed to create database backup:\n{0}")]
    Dump(#[source] Box<dyn core::error::Error + Send + Sync>),

    #[error("Failed to write database backup to file:\n{0}")]
    Write(#[source] StoreError),

    #[error("Failed to clean up old backups:\n{0}")]
    Cleanup(#[source] StoreError),
}
