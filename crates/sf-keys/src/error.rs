//! Error types for sf-keys.

use std::io;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering key tags.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output sink failed. `written` counts the bytes it accepted
    /// before the failure.
    #[error("write failed after {written} bytes: {source}")]
    Write {
        written: u64,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create a write error.
    pub fn write(written: u64, source: io::Error) -> Self {
        Self::Write { written, source }
    }

    /// Number of bytes successfully written before the failure.
    pub fn written(&self) -> u64 {
        match self {
            Self::Write { written, .. } => *written,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Write { source, .. } => source.kind(),
        }
    }

    /// Shift the byte count by output written earlier in the same call.
    pub(crate) fn after(self, prior: u64) -> Self {
        match self {
            Self::Write { written, source } => Self::Write {
                written: prior + written,
                source,
            },
        }
    }
}
