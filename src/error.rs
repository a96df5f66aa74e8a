// src/error.rs

//! Error types for print conversion

use std::path::PathBuf;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a source tree
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a selected file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid UTF-8
    #[error("{} is not valid UTF-8 text", .path.display())]
    Encoding { path: PathBuf },

    /// Suffix used for file selection is unusable
    #[error("invalid source suffix: {0:?}")]
    InvalidSuffix(String),

    /// Root of the traversal is missing or not a directory
    #[error("not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the file the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. } | Self::Encoding { path } | Self::InvalidRoot(path) => {
                Some(path)
            }
            Self::InvalidSuffix(_) => None,
        }
    }
}
