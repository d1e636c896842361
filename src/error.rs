//! Error types for merge operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by configuration loading, traversal, and copying.
///
/// Only one condition is ever recovered from (an existing destination
/// directory under the `skip` policy, which never reaches this type); every
/// variant here aborts the run when it propagates out of
/// [`TreeMerger::run`](crate::merger::TreeMerger::run).
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Target root {0} does not exist or is not a directory")]
    TargetRootMissing(PathBuf),

    #[error("Destination directory already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Traversal error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    /// Attach the offending path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::IoError {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for MergeError {
    fn from(err: config::ConfigError) -> Self {
        MergeError::ConfigError(err.to_string())
    }
}
