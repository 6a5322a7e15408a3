//! JSON API handler modules.

pub mod body;
#[allow(clippy::missing_errors_doc)]
pub mod customers;
#[allow(clippy::missing_errors_doc)]
pub mod interactions;

use axum::Router;
use axum::routing::{get, put};

use clienthub_app::ports::DocumentStore;
use clienthub_domain::error::{ClientHubError, NotFoundError};
use clienthub_domain::id::CustomerId;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the customer/interaction sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: DocumentStore + Send + Sync + 'static,
{
    Router::new()
        // Customers
        .route(
            "/clientes",
            get(customers::list::<S>).post(customers::create::<S>),
        )
        .route(
            "/clientes/{id}",
            get(customers::get::<S>).delete(customers::delete::<S>),
        )
        .route("/clientes/{id}/activar", put(customers::activate::<S>))
        .route("/clientes/{id}/desactivar", put(customers::deactivate::<S>))
        // Interactions
        .route(
            "/clientes/{id}/interacciones",
            get(interactions::list::<S>).post(interactions::create::<S>),
        )
}

/// Parse a customer id path segment. Segments without a leading integer
/// match no customer.
fn customer_id(raw: &str) -> Result<CustomerId, ApiError> {
    CustomerId::parse_lenient(raw).ok_or_else(|| {
        ApiError::from(ClientHubError::from(NotFoundError {
            entity: "Customer",
            id: raw.to_string(),
        }))
    })
}
