//! # Shared
//! The ambient components shared by the backup tool and its tests.
//!

#![warn(missing_docs)]

mod logger;

pub use logger::{LoggerError, init_logger};
