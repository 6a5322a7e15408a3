//! Storage-specific error type wrapping file and JSON errors.

use std::path::PathBuf;

use clienthub_domain::error::ClientHubError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid document.
    #[error("invalid document in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for ClientHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
