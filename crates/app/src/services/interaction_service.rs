//! Interaction service — use-cases for a customer's interaction log.

use std::sync::Arc;

use clienthub_domain::error::ClientHubError;
use clienthub_domain::fields::Fields;
use clienthub_domain::id::CustomerId;
use clienthub_domain::interaction::Interaction;
use clienthub_domain::time::now;

use super::customer_not_found;
use crate::gate::DocumentGate;
use crate::ports::DocumentStore;

/// Application service for listing and recording interactions.
pub struct InteractionService<S> {
    gate: Arc<DocumentGate<S>>,
}

impl<S: DocumentStore + Send + Sync> InteractionService<S> {
    /// Create a new service on top of the given gate.
    pub fn new(gate: Arc<DocumentGate<S>>) -> Self {
        Self { gate }
    }

    /// All interactions of an existing customer, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientHubError::NotFound`] when the customer does not exist,
    /// even if orphaned interactions still reference its id.
    #[tracing::instrument(skip(self))]
    pub async fn list_interactions(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Interaction>, ClientHubError> {
        self.gate
            .read(|doc| {
                let customer = doc
                    .customer(customer_id)
                    .ok_or_else(|| customer_not_found(customer_id))?;
                Ok(doc.interactions_of(customer.id).cloned().collect())
            })
            .await
    }

    /// Record a new interaction dated now.
    ///
    /// # Errors
    ///
    /// Returns [`ClientHubError::NotFound`] when the customer does not exist
    /// (nothing is stored), or a storage error.
    #[tracing::instrument(skip(self, fields))]
    pub async fn record_interaction(
        &self,
        customer_id: CustomerId,
        fields: Fields,
    ) -> Result<Interaction, ClientHubError> {
        let interaction = self
            .gate
            .write(|doc| {
                let customer = doc
                    .customer(customer_id)
                    .ok_or_else(|| customer_not_found(customer_id))?;
                let owner = customer.id;
                Ok(doc.insert_interaction(owner, fields, now()))
            })
            .await?;
        tracing::info!(
            customer_id = %customer_id,
            interaction_id = %interaction.id,
            "interaction recorded"
        );
        Ok(interaction)
    }
}
