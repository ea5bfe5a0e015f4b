//! Backup source to retreive dumps from.
//!

use core::fmt::Debug;

mod docker_postgres;
mod mock;

pub use docker_postgres::{DockerPostgres, DockerPostgresError};
pub use mock::{Mock, MockError};

/// A source to make a backup of.
pub trait DumpSource: Debug {
    /// Error variants.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Produce a dump of the source.
    fn dump(&self) -> Result<Vec<u8>, Self::Error>;
}
