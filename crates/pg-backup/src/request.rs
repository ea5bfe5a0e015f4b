//! A validated backup request.
//!

use std::path::PathBuf;

use thiserror::Error;

/// The default number of backups kept per database.
pub const DEFAULT_KEEP_BACKUPS: usize = 2;

/// Everything needed to back up one database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupRequest {
    /// The directory backups are written to, must already exist.
    pub backup_directory: PathBuf,
    /// The container the database runs in.
    pub container: String,
    /// The database to dump, also names the backup files.
    pub database: String,
    /// The user to dump as.
    pub user: String,
    /// How many backups of this database to keep.
    pub keep_backups: usize,
}

impl BackupRequest {
    /// Create a request, checking every value is usable.
    pub fn new(
        backup_directory: Option<PathBuf>,
        container: Option<String>,
        database: Option<String>,
        user: Option<String>,
        keep_backups: Option<usize>,
    ) -> Result<Self, RequestError> {
        let backup_directory = backup_directory.filter(|path| !path.as_os_str().is_empty());
        let container = container.filter(|value| !value.is_empty());
        let database = database.filter(|value| !value.is_empty());
        let user = user.filter(|value| !value.is_empty());

        let (Some(backup_directory), Some(container), Some(database), Some(user)) =
            (backup_directory, container, database, user)
        else {
            return Err(RequestError::Missing);
        };

        if database.contains(['/', '\\', '\0']) {
            return Err(RequestError::InvalidDatabase(database));
        }

        Ok(Self {
            backup_directory,
            container,
            database,
            user,
            keep_backups: keep_backups.unwrap_or(DEFAULT_KEEP_BACKUPS),
        })
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("backup-dir, db-container, db-name and db-user must all be provided")]
    Missing,

    #[error("Database name '{0}' cannot be used in a file name")]
    InvalidDatabase(String),
}
