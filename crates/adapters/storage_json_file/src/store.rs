//! [`DocumentStore`] implementation over a single JSON file.

use std::future::Future;
use std::path::{Path, PathBuf};

use clienthub_app::ports::DocumentStore;
use clienthub_domain::document::Document;
use clienthub_domain::error::ClientHubError;

use crate::error::StorageError;

/// Configuration for the JSON file storage adapter.
pub struct Config {
    /// Path of the backing file (e.g. `./clientes.json`).
    pub path: PathBuf,
}

impl Config {
    /// Build the store described by this configuration.
    ///
    /// The file is not touched until the first load or save.
    #[must_use]
    pub fn build(self) -> JsonFileStore {
        JsonFileStore::new(self.path)
    }
}

/// Document store reading and rewriting one JSON file in full.
///
/// Saves overwrite the file in place, so a crash mid-write can leave it
/// truncated.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Document, StorageError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, document: &Document) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.path.display(),
            customers = document.customers.len(),
            interactions = document.interactions.len(),
            "document saved"
        );
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> impl Future<Output = Result<Document, ClientHubError>> + Send {
        async move { Ok(self.read().await?) }
    }

    fn save(&self, document: &Document) -> impl Future<Output = Result<(), ClientHubError>> + Send {
        async move { Ok(self.write(document).await?) }
    }
}
