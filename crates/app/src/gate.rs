//! Serialized access to the persisted document.

use tokio::sync::Mutex;

use clienthub_domain::document::Document;
use clienthub_domain::error::ClientHubError;

use crate::ports::DocumentStore;

/// Single-writer gate around a [`DocumentStore`].
///
/// Every access locks, reloads the document from the store, and for writes
/// saves it back before unlocking. No other request can load or save in
/// between, so concurrent writers cannot lose each other's updates. Nothing
/// is cached: each call sees the store's current content.
pub struct DocumentGate<S> {
    store: S,
    lock: Mutex<()>,
}

impl<S: DocumentStore + Sync> DocumentGate<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Access the underlying store, for inspection outside the gate.
    ///
    /// Anything read this way bypasses the lock and may race with writers.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the document and run a read-only computation on it.
    ///
    /// # Errors
    ///
    /// Returns the store's load error, or whatever `f` returns.
    pub async fn read<T, F>(&self, f: F) -> Result<T, ClientHubError>
    where
        F: FnOnce(&Document) -> Result<T, ClientHubError> + Send,
    {
        let _guard = self.lock.lock().await;
        let document = self.store.load().await?;
        f(&document)
    }

    /// Load the document, mutate it, and save it back.
    ///
    /// The document is only saved when `f` succeeds.
    ///
    /// # Errors
    ///
    /// Returns the store's load or save error, or whatever `f` returns.
    pub async fn write<T, F>(&self, f: F) -> Result<T, ClientHubError>
    where
        F: FnOnce(&mut Document) -> Result<T, ClientHubError> + Send,
        T: Send,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.store.load().await?;
        let output = f(&mut document)?;
        self.store.save(&document).await?;
        Ok(output)
    }
}
