//! # common
//!

#![allow(dead_code)]

use core::time::Duration;
use std::{
    fs::{self, File},
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use pg_backup::runtime::RuntimeProbe;

/// A point in time `seconds` after the epoch.
pub fn at(seconds: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(seconds)
}

/// Create `name` in `directory` with a modified time `seconds` after the epoch.
pub fn touch(directory: &Path, name: &str, seconds: u64) {
    let path = directory.join(name);
    fs::write(&path, name).unwrap();
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(at(seconds))
        .unwrap();
}

/// The sorted names of every entry in `directory`.
pub fn names_in(directory: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(directory)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

/// A runtime probe with a fixed answer.
pub struct FixedProbe(pub bool);

impl RuntimeProbe for FixedProbe {
    fn is_available(&self) -> bool {
        self.0
    }
}
