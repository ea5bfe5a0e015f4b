//! Tests for the directory store
//!

use std::fs;

use common::touch;
use pg_backup::store::{BackupStore, Directory, StoreError};

mod common;

#[test]
fn write_creates_file() {
    let directory = tempfile::tempdir().unwrap();
    let store = Directory::new(directory.path());

    let path = store.write("backup_app_2024-01-01.sql", b"-- dump").unwrap();

    assert_eq!(path, directory.path().join("backup_app_2024-01-01.sql"));
    assert_eq!(fs::read(path).unwrap(), b"-- dump");
}

#[test]
fn write_truncates_existing_file() {
    let directory = tempfile::tempdir().unwrap();
    let store = Directory::new(directory.path());

    store.write("backup.sql", b"a much longer first dump").unwrap();
    let path = store.write("backup.sql", b"short").unwrap();

    assert_eq!(fs::read(path).unwrap(), b"short");
}

#[cfg(unix)]
#[test]
fn write_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;

    use pg_backup::store::BACKUP_FILE_MODE;

    let directory = tempfile::tempdir().unwrap();
    let store = Directory::new(directory.path());

    // Existing file with wider permissions is narrowed.
    let existing = directory.path().join("backup.sql");
    fs::write(&existing, "old").unwrap();
    fs::set_permissions(&existing, fs::Permissions::from_mode(0o755)).unwrap();

    for name in ["new.sql", "backup.sql"] {
        let path = store.write(name, b"-- dump").unwrap();
        let mode = fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, BACKUP_FILE_MODE);
    }
}

#[test]
fn write_missing_directory_errors() {
    let directory = tempfile::tempdir().unwrap();
    let missing = directory.path().join("missing");
    let store = Directory::new(&missing);

    let result = store.write("backup.sql", b"-- dump");

    assert!(matches!(result, Err(StoreError::Io(..))));
    assert!(!missing.exists());
}

#[test]
fn list_skips_directories_and_other_prefixes() {
    let directory = tempfile::tempdir().unwrap();
    touch(directory.path(), "backup_app_2024-01-01.sql", 100);
    touch(directory.path(), "backup_other_2024-01-01.sql", 200);
    fs::create_dir(directory.path().join("backup_app_nested")).unwrap();

    let store = Directory::new(directory.path());
    let files = store.list("backup_app_").unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "backup_app_2024-01-01.sql");
    assert_eq!(files[0].modified, common::at(100));
}

#[test]
fn remove_deletes_file() {
    let directory = tempfile::tempdir().unwrap();
    touch(directory.path(), "backup.sql", 1);

    let store = Directory::new(directory.path());
    store.remove("backup.sql").unwrap();

    assert!(!directory.path().join("backup.sql").exists());
    assert!(matches!(store.remove("backup.sql"), Err(StoreError::Io(..))));
}
