//! # clienthub-adapter-storage-json-file
//!
//! Flat-file persistence adapter: the whole document lives in one JSON file.
//!
//! ## Responsibilities
//! - Implement the `DocumentStore` port defined in `clienthub-app::ports`
//! - Read and parse the entire file on every load
//! - Serialize the entire document (pretty-printed) and overwrite the file on
//!   every save
//!
//! Nothing is cached and nothing is locked here; serialization of writers is
//! the job of `clienthub-app::gate::DocumentGate`.
//!
//! ## Dependency rule
//! Depends on `clienthub-app` (for the port trait) and `clienthub-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod store;

pub use error::StorageError;
pub use store::{Config, JsonFileStore};
