//! # pg-backup
//! Dump a Postgres database from a Docker container into a directory, keeping only the newest
//! backups.
//!

use chrono::NaiveDate;

pub mod backup;
pub mod cleanup;
pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod naming;
pub mod request;
pub mod runtime;
pub mod source;
pub mod store;

/// A backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    /// The backup's file name.
    pub file_name: String,
    /// The dump.
    pub contents: Vec<u8>,
}

impl Backup {
    /// A backup of `database` taken on `date`.
    pub fn new(database: &str, date: NaiveDate, contents: Vec<u8>) -> Self {
        Self {
            file_name: naming::backup_file_name(database, date),
            contents,
        }
    }
}
