//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ClientHubError`] via `#[from]`.

use std::error::Error;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum ClientHubError {
    /// A record addressed by id does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The requested page starts past the end of the collection.
    #[error("page out of range")]
    PageOutOfRange(#[from] PageOutOfRange),

    /// The backing store failed to load or save the document.
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// Lookup miss for a record of the given kind.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Customer"`.
    pub entity: &'static str,
    /// The id as it was requested.
    pub id: String,
}

/// A page whose first index is at or past the end of the collection.
#[derive(Debug, thiserror::Error)]
#[error("page {page} with limit {limit} is past the end of {total} records")]
pub struct PageOutOfRange {
    /// Effective page number that was requested.
    pub page: i64,
    /// Effective page size that was requested.
    pub limit: i64,
    /// Number of records in the collection.
    pub total: usize,
}
