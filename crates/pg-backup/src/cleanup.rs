//! Retention of old backups.
//!

use tracing::{debug, info};

use crate::{
    naming::backup_prefix,
    store::{BackupStore, StoreError, StoredFile},
};

/// Remove the oldest backups of `database` until at most `keep_backups` remain.
///
/// Only files named with `database`'s backup prefix are considered. Files are ordered by
/// modified time, ties are broken by name. Returns the removed file names, oldest first.
///
/// The first failed removal stops the cleanup; files removed before it stay removed.
pub fn prune<Store: BackupStore + ?Sized>(
    store: &Store,
    database: &str,
    keep_backups: usize,
) -> Result<Vec<String>, StoreError> {
    let prefix = backup_prefix(database);

    let mut files: Vec<StoredFile> = store.list(&prefix)?;

    // If there is less than the limit, nothing to do.
    if files.len() <= keep_backups {
        debug!(
            "{} backups of '{database}' within limit of {keep_backups}",
            files.len()
        );
        return Ok(Vec::new());
    }

    // Sort by age, oldest first.
    files.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.name.cmp(&b.name)));

    let excess = files.len() - keep_backups;
    let mut removed = Vec::with_capacity(excess);
    for file in files.into_iter().take(excess) {
        store.remove(&file.name)?;
        info!("Removed old backup {}", file.name);
        removed.push(file.name);
    }

    Ok(removed)
}
