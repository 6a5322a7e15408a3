//! Application services — use-case implementations.
//!
//! Each service holds a shared [`DocumentGate`](crate::gate::DocumentGate)
//! over a store implementation injected via a generic parameter, keeping this
//! layer decoupled from concrete adapters. Services built on the same gate
//! are serialized against each other.

pub mod customer_service;
pub mod interaction_service;

use clienthub_domain::error::{ClientHubError, NotFoundError};
use clienthub_domain::id::CustomerId;

fn customer_not_found(id: CustomerId) -> ClientHubError {
    NotFoundError {
        entity: "Customer",
        id: id.to_string(),
    }
    .into()
}
