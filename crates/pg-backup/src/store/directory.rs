use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use tracing::debug;

use super::{BackupStore, StoreError, StoredFile};

/// Owner and group may read and write, nobody else has access.
#[cfg(unix)]
pub const BACKUP_FILE_MODE: u32 = 0o660;

/// A store backed by an existing directory.
#[derive(Debug, Clone)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    /// A store over `path`. The directory is never created by the store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BackupStore for Directory {
    fn write(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.path.join(file_name);

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(BACKUP_FILE_MODE);
        }

        let mut file = options
            .open(&path)
            .map_err(|e| StoreError::Io(e, "create", path.clone()))?;

        // Mode only applies on creation and is masked by the umask.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(BACKUP_FILE_MODE))
                .map_err(|e| StoreError::Io(e, "set permissions of", path.clone()))?;
        }

        file.write_all(contents)
            .map_err(|e| StoreError::Io(e, "write", path.clone()))?;
        file.flush()
            .map_err(|e| StoreError::Io(e, "flush", path.clone()))?;

        Ok(path)
    }

    fn list(&self, prefix: &str) -> Result<Vec<StoredFile>, StoreError> {
        let directory = fs::read_dir(&self.path)
            .map_err(|e| StoreError::Io(e, "read directory", self.path.clone()))?;

        let mut files = Vec::new();
        for entry in directory {
            let entry =
                entry.map_err(|e| StoreError::Io(e, "read entry of", self.path.clone()))?;
            let path = entry.path();

            let Ok(name) = entry.file_name().into_string() else {
                debug!("Skipping non UTF-8 file name {path:?}");
                continue;
            };

            // Other entries may belong to another run, only matches are inspected.
            if !name.starts_with(prefix) {
                continue;
            }

            let metadata = entry
                .metadata()
                .map_err(|e| StoreError::Io(e, "get metadata of", path.clone()))?;
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata
                .modified()
                .map_err(|e| StoreError::Io(e, "get modified time of", path.clone()))?;

            files.push(StoredFile { name, modified });
        }

        Ok(files)
    }

    fn remove(&self, file_name: &str) -> Result<(), StoreError> {
        let path = self.path.join(file_name);
        fs::remove_file(&path).map_err(|e| StoreError::Io(e, "remove", path))
    }
}
