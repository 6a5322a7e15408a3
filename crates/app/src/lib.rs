//! # clienthub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement:
//!   - `DocumentStore` — load and save the whole document
//! - Serialize document access through the [`gate::DocumentGate`] so that one
//!   request's load-mutate-save never interleaves with another's
//! - Define the use-case services:
//!   - `CustomerService` — list (paged), get, create, activate, deactivate, delete
//!   - `InteractionService` — list and record interactions of a customer
//! - Provide an in-process [`memory_store::InMemoryStore`] for tests and demos
//!
//! ## Dependency rule
//! Depends on `clienthub-domain` only (plus `tokio::sync` for the gate).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod gate;
pub mod memory_store;
pub mod ports;
pub mod services;
