//! # clienthub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/clientes`:
//!   - `GET    /clientes?page&limit`          — paged customer list
//!   - `GET    /clientes/{id}`                — single customer
//!   - `POST   /clientes`                     — create customer
//!   - `PUT    /clientes/{id}/activar`        — activate customer
//!   - `PUT    /clientes/{id}/desactivar`     — deactivate customer
//!   - `DELETE /clientes/{id}`                — delete customer
//!   - `GET    /clientes/{id}/interacciones`  — interactions of a customer
//!   - `POST   /clientes/{id}/interacciones`  — record an interaction
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses with `mensaje`
//!   bodies for failures
//!
//! ## Dependency rule
//! Depends on `clienthub-app` (for port traits and services) and
//! `clienthub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
