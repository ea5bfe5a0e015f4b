//! Storage for backup files.
//!

use std::{io, path::PathBuf, time::SystemTime};

use thiserror::Error;

mod directory;
mod memory;

#[cfg(unix)]
pub use directory::BACKUP_FILE_MODE;
pub use directory::Directory;
pub use memory::Memory;

/// A file in a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// The file's name within the store.
    pub name: String,
    /// When the file was last modified.
    pub modified: SystemTime,
}

/// A place backup files are kept.
pub trait BackupStore {
    /// Create or replace `file_name` with `contents`, returns the file's path.
    fn write(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, StoreError>;

    /// Every regular file in the store whose name starts with `prefix`.
    ///
    /// Files without the prefix are never inspected.
    fn list(&self, prefix: &str) -> Result<Vec<StoredFile>, StoreError>;

    /// Remove `file_name` from the store.
    fn remove(&self, file_name: &str) -> Result<(), StoreError>;
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to {1} {2:?}:\n{0}")]
    Io(#[source] io::Error, &'static str, PathBuf),
}
