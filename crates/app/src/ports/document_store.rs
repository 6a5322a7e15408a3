//! Document store port — whole-document persistence.

use std::future::Future;

use clienthub_domain::document::Document;
use clienthub_domain::error::ClientHubError;

/// Backing storage for the [`Document`].
///
/// Implementations read and write the document as a whole. They do no
/// locking and no caching of their own; callers go through
/// [`DocumentGate`](crate::gate::DocumentGate) for that.
pub trait DocumentStore {
    /// Read and parse the full document.
    ///
    /// There is no default document: a missing or unreadable source is an
    /// error.
    fn load(&self) -> impl Future<Output = Result<Document, ClientHubError>> + Send;

    /// Replace the stored document with `document`.
    fn save(&self, document: &Document) -> impl Future<Output = Result<(), ClientHubError>> + Send;
}
