//! Error types for `fiendres`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `fiendres` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The asset root directory does not exist.
    #[error("asset root not found: {path}")]
    AssetRootNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `fiendres` operations.
pub type Result<T> = std::result::Result<T, Error>;
