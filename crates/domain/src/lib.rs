//! # clienthub-domain
//!
//! Pure domain model for the clienthub customer service.
//!
//! ## Responsibilities
//! - Foundational types: integer identifiers, error conventions, timestamps
//! - Define **Customers** (`clientes`) with their activation flag
//! - Define **Interactions** (`interacciones`), timestamped records tied to a customer
//! - Define the **Document**, the single root structure that owns both collections
//! - Define **pagination** over the customer collection
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod fields;
pub mod id;
pub mod number;
pub mod time;

pub mod customer;
pub mod document;
pub mod interaction;
pub mod page;
