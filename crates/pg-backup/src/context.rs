//! Context for the current backup
//!

use core::fmt;

/// Holds the context for the current backup. Used for prefixing logs.
#[derive(Debug)]
pub struct Context {
    /// The database being backed up.
    pub database: String,
    /// The container the database runs in.
    pub container: String,
    /// The current step.
    pub current_context: &'static str,
}

impl Context {
    /// A context for backing up `database` from `container`.
    pub fn new(database: &str, container: &str) -> Self {
        Self {
            database: database.to_string(),
            container: container.to_string(),
            current_context: "Preflight",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{}] [{}] ",
            self.database, self.container, self.current_context
        )
    }
}
