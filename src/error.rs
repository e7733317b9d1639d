//! Error types for mirror operations
//!
//! Every failure carries the path involved so callers can report exactly
//! where a pass stopped. There is no retry here; recovery for the actual
//! transfer belongs to the service consuming the job.

use std::io;
use std::path::PathBuf;

use crate::constants::{
    ERR_FILESYSTEM, ERR_FILTER, ERR_SOURCE_NOT_DIR, ERROR_KIND_FILTER, ERROR_KIND_INVALID_SOURCE,
    ERROR_KIND_IO_ERROR,
};

/// Error raised by a caller-supplied file filter
///
/// Filters return whatever error type the caller likes; it is boxed and
/// propagated unchanged inside [`MirrorError::Filter`].
pub type FilterError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for mirror pass failures
///
/// A mirror pass aborts on the first failure. Directories created before
/// the failure remain in place; there is no rollback.
#[derive(Debug)]
pub enum MirrorError {
    /// The source root does not exist or is not a directory
    ///
    /// Raised before any side effects, so a pass failing this way has
    /// created nothing.
    InvalidSource(PathBuf),
    /// A directory could not be created, or enumeration failed
    Filesystem {
        /// The directory being created or enumerated
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
    /// The caller-supplied filter returned an error
    ///
    /// The inner error is propagated unchanged via `source()`.
    Filter {
        /// The file the filter was evaluating
        path: PathBuf,
        /// The error the filter returned
        source: FilterError,
    },
}

impl MirrorError {
    /// The machine-readable kind string for this error
    ///
    /// One of the `ERROR_KIND_*` constants. Stable across releases,
    /// suitable for logs and dispatch.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSource(_) => ERROR_KIND_INVALID_SOURCE,
            Self::Filesystem { .. } => ERROR_KIND_IO_ERROR,
            Self::Filter { .. } => ERROR_KIND_FILTER,
        }
    }

    /// The path this error is about
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::InvalidSource(path) => path,
            Self::Filesystem { path, .. } => path,
            Self::Filter { path, .. } => path,
        }
    }
}

impl std::fmt::Display for MirrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSource(path) => {
                write!(f, "{}{}", ERR_SOURCE_NOT_DIR, path.display())
            }
            Self::Filesystem { path, source } => {
                write!(f, "{}{}: {}", ERR_FILESYSTEM, path.display(), source)
            }
            Self::Filter { path, source } => {
                write!(f, "{}{}: {}", ERR_FILTER, path.display(), source)
            }
        }
    }
}

impl std::error::Error for MirrorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSource(_) => None,
            Self::Filesystem { source, .. } => Some(source),
            Self::Filter { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<MirrorError> for io::Error {
    fn from(e: MirrorError) -> Self {
        match e {
            MirrorError::InvalidSource(_) => {
                io::Error::new(io::ErrorKind::NotFound, e.to_string())
            }
            MirrorError::Filesystem { .. } => io::Error::other(e.to_string()),
            MirrorError::Filter { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
            }
        }
    }
}
