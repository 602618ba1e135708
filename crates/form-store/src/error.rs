//! Storage error types.

use std::io;
use std::path::PathBuf;

use form_core::CoreError;
use thiserror::Error;

/// Errors from storage operations.
///
/// A missing record is never an error: lookups return `None` and deletes
/// return `false`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A base directory could not be created. Fatal at construction.
    #[error("Failed to create storage directory {}: {source}", path.display())]
    DirectoryInit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading, writing, listing or removing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file is not JSON, or a value failed to serialize.
    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A file parsed but its content is unusable.
    #[error("Corrupt file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// Invalid record id, or id generation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path) -> impl FnOnce(serde_json::Error) -> Self + '_ {
        move |source| Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}
