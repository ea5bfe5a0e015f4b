use thiserror::Error;

use super::DumpSource;

/// Mock a backup source.
#[derive(Debug, Clone)]
pub struct Mock {
    outcome: Result<Vec<u8>, String>,
}

impl Mock {
    /// A source whose dump is `contents`.
    pub fn succeeding(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            outcome: Ok(contents.into()),
        }
    }

    /// A source whose dump fails with `diagnostic`.
    pub fn failing(diagnostic: impl Into<String>) -> Self {
        Self {
            outcome: Err(diagnostic.into()),
        }
    }
}

impl Default for Mock {
    fn default() -> Self {
        Self::succeeding(vec![0u8; 512])
    }
}

impl DumpSource for Mock {
    type Error = MockError;

    fn dump(&self) -> Result<Vec<u8>, Self::Error> {
        self.outcome.clone().map_err(MockError)
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
#[error("Mock dump failed:\n{0}")]
pub struct MockError(pub String);
