//! Backup file names.
//!

use chrono::NaiveDate;

/// The prefix shared by every backup file of `database`.
pub fn backup_prefix(database: &str) -> String {
    format!("backup_{database}_")
}

/// The file name of `database`'s backup taken on `date`, `backup_<database>_<YYYY-MM-DD>.sql`.
///
/// There is one name per database per day, so a second backup on the same day replaces the
/// first.
pub fn backup_file_name(database: &str, date: NaiveDate) -> String {
    format!("{}{}.sql", backup_prefix(database), date.format("%Y-%m-%d"))
}
