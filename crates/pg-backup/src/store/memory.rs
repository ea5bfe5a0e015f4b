use core::cell::RefCell;
use std::{collections::BTreeMap, io, path::PathBuf, time::SystemTime};

use super::{BackupStore, StoreError, StoredFile};

/// An in-memory store for exercising retention without a filesystem.
#[derive(Debug, Default)]
pub struct Memory {
    files: RefCell<BTreeMap<String, (Vec<u8>, SystemTime)>>,
    fail_removal_of: Option<String>,
}

impl Memory {
    /// Make removing `file_name` fail.
    pub fn failing_removal_of(mut self, file_name: &str) -> Self {
        self.fail_removal_of = Some(file_name.to_string());
        self
    }

    /// Insert an empty file modified at `modified`.
    pub fn insert(&self, file_name: &str, modified: SystemTime) {
        self.files
            .borrow_mut()
            .insert(file_name.to_string(), (Vec::new(), modified));
    }

    /// The names of every file, in name order.
    pub fn names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    /// The contents of `file_name`.
    pub fn contents(&self, file_name: &str) -> Option<Vec<u8>> {
        self.files
            .borrow()
            .get(file_name)
            .map(|(contents, _)| contents.clone())
    }
}

impl BackupStore for Memory {
    fn write(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, StoreError> {
        self.files.borrow_mut().insert(
            file_name.to_string(),
            (contents.to_vec(), SystemTime::now()),
        );

        Ok(PathBuf::from(file_name))
    }

    fn list(&self, prefix: &str) -> Result<Vec<StoredFile>, StoreError> {
        let files = self
            .files
            .borrow()
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, (_, modified))| StoredFile {
                name: name.clone(),
                modified: *modified,
            })
            .collect();

        Ok(files)
    }

    fn remove(&self, file_name: &str) -> Result<(), StoreError> {
        if self.fail_removal_of.as_deref() == Some(file_name) {
            let error = io::Error::new(io::ErrorKind::PermissionDenied, "removal rejected");
            return Err(StoreError::Io(error, "remove", PathBuf::from(file_name)));
        }

        match self.files.borrow_mut().remove(file_name) {
            Some(_) => Ok(()),
            None => Err(StoreError::Io(
                io::ErrorKind::NotFound.into(),
                "remove",
                PathBuf::from(file_name),
            )),
        }
    }
}
