//! Shared application state for axum handlers.

use std::sync::Arc;

use clienthub_app::gate::DocumentGate;
use clienthub_app::ports::DocumentStore;
use clienthub_app::services::customer_service::CustomerService;
use clienthub_app::services::interaction_service::InteractionService;

/// Application state shared across all axum handlers.
///
/// Generic over the document store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Customer CRUD and activation service.
    pub customer_service: Arc<CustomerService<S>>,
    /// Interaction log service.
    pub interaction_service: Arc<InteractionService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            customer_service: Arc::clone(&self.customer_service),
            interaction_service: Arc::clone(&self.interaction_service),
        }
    }
}

impl<S> AppState<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    ///
    /// Both services should share one [`DocumentGate`] so that their writes
    /// are serialized against each other.
    pub fn new(
        customer_service: CustomerService<S>,
        interaction_service: InteractionService<S>,
    ) -> Self {
        Self {
            customer_service: Arc::new(customer_service),
            interaction_service: Arc::new(interaction_service),
        }
    }

    /// Wire both services on a single gate over `store`.
    pub fn from_store(store: S) -> Self {
        let gate = Arc::new(DocumentGate::new(store));
        Self::new(
            CustomerService::new(Arc::clone(&gate)),
            InteractionService::new(gate),
        )
    }
}
