//! In-process [`DocumentStore`] keeping the document in memory.
//!
//! Stores a serialized-equivalent copy: every `load` hands out a fresh clone,
//! so callers mutate their own copy exactly as they would with a file.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use clienthub_domain::document::Document;
use clienthub_domain::error::ClientHubError;

use crate::ports::DocumentStore;

/// Raised when loading from a store that holds no document.
#[derive(Debug, thiserror::Error)]
#[error("no document stored")]
pub struct MissingDocument;

/// Memory-backed document store.
pub struct InMemoryStore {
    document: Mutex<Option<Document>>,
    saves: AtomicUsize,
}

impl InMemoryStore {
    /// Store seeded with `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Store with nothing in it; every `load` fails until a `save`.
    #[must_use]
    pub fn missing() -> Self {
        Self {
            document: Mutex::new(None),
            saves: AtomicUsize::new(0),
        }
    }

    /// Copy of the currently stored document.
    #[must_use]
    pub fn snapshot(&self) -> Option<Document> {
        self.slot().clone()
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Document>> {
        self.document
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> impl Future<Output = Result<Document, ClientHubError>> + Send {
        let result = self
            .snapshot()
            .ok_or_else(|| ClientHubError::Storage(Box::new(MissingDocument)));
        async { result }
    }

    fn save(&self, document: &Document) -> impl Future<Output = Result<(), ClientHubError>> + Send {
        *self.slot() = Some(document.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        async { Ok(()) }
    }
}
