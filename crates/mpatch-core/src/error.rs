//! Error types for the patch pipeline.

use std::io;
use std::path::PathBuf;

/// Errors produced while generating patches.
///
/// Everything except [`PatchError::RootAccess`] is scoped to a single
/// candidate file; the driver records those as failures and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// The scan root is missing, unreadable, or not a directory.
    #[error("cannot enumerate scan root {path:?}: {source}")]
    RootAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Open, read, or write failure on a single file.
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File is larger than the loader is willing to hold in memory.
    #[error("file too large to read into memory: {path:?} is {size} bytes, limit {limit}")]
    Size { path: PathBuf, size: u64, limit: u64 },

    /// File content is not valid UTF-8.
    #[error("file is not valid UTF-8: {path:?}")]
    Encoding { path: PathBuf },

    /// File content is not valid JSON.
    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The directory tree for an output patch could not be created.
    #[error("failed to create directory structure {path:?}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A candidate path does not lie under the scan root.
    #[error("{path:?} is not under scan root {root:?}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// The patch document could not be serialized.
    #[error(transparent)]
    Diff(#[from] mpatch_diff::DiffError),
}

impl PatchError {
    /// Returns `true` if this error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::RootAccess { .. })
    }
}

/// Convenience alias used throughout the core crate.
pub type PatchResult<T> = Result<T, PatchError>;
