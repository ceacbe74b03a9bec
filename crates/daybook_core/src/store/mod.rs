//! Journal store contracts and filesystem persistence.
//!
//! # Responsibility
//! - Define the day-file persistence contract used by services.
//! - Keep filesystem details inside the store boundary.
//!
//! # Invariants
//! - A missing day file is a semantic outcome (`false`/`None`), never an
//!   error; every other I/O failure propagates with its path attached.
//! - The day-file header is written at most once per file.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod journal_store;

pub use journal_store::{FsJournalStore, JournalStore};

pub type JournalResult<T> = Result<T, JournalError>;

/// Error for journal persistence operations.
#[derive(Debug)]
pub enum JournalError {
    /// Filesystem operation failed for the given journal path.
    Io { path: PathBuf, source: io::Error },
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "journal file operation failed at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl JournalError {
    /// Attaches the affected path to a raw I/O error.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
