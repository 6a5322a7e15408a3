//! Customer service — use-cases for managing customers.

use std::sync::Arc;

use clienthub_domain::customer::Customer;
use clienthub_domain::error::ClientHubError;
use clienthub_domain::fields::Fields;
use clienthub_domain::id::CustomerId;
use clienthub_domain::page::{Page, PageRequest};

use super::customer_not_found;
use crate::gate::DocumentGate;
use crate::ports::DocumentStore;

/// Application service for customer CRUD and activation.
pub struct CustomerService<S> {
    gate: Arc<DocumentGate<S>>,
}

impl<S: DocumentStore + Send + Sync> CustomerService<S> {
    /// Create a new service on top of the given gate.
    pub fn new(gate: Arc<DocumentGate<S>>) -> Self {
        Self { gate }
    }

    /// List one page of customers in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientHubError::PageOutOfRange`] when the page starts past the
    /// last customer, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn list_customers(&self, request: PageRequest) -> Result<Page<Customer>, ClientHubError> {
        self.gate
            .read(|doc| Ok(request.apply(&doc.customers)?))
            .await
    }

    /// Look up a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientHubError::NotFound`] when no customer with `id` exists,
    /// or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, ClientHubError> {
        self.gate
            .read(|doc| doc.customer(id).cloned().ok_or_else(|| customer_not_found(id)))
            .await
    }

    /// Create an active customer from caller-supplied fields.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self, fields), fields(field_count = fields.len()))]
    pub async fn create_customer(&self, fields: Fields) -> Result<Customer, ClientHubError> {
        let customer = self.gate.write(|doc| Ok(doc.insert_customer(fields))).await?;
        tracing::info!(customer_id = %customer.id, "customer created");
        Ok(customer)
    }

    /// Mark a customer active.
    ///
    /// # Errors
    ///
    /// Returns [`ClientHubError::NotFound`] when no customer with `id` exists,
    /// or a storage error.
    pub async fn activate_customer(&self, id: CustomerId) -> Result<Customer, ClientHubError> {
        self.set_active(id, true).await
    }

    /// Mark a customer inactive.
    ///
    /// # Errors
    ///
    /// Returns [`ClientHubError::NotFound`] when no customer with `id` exists,
    /// or a storage error.
    pub async fn deactivate_customer(&self, id: CustomerId) -> Result<Customer, ClientHubError> {
        self.set_active(id, false).await
    }

    #[tracing::instrument(skip(self))]
    async fn set_active(&self, id: CustomerId, active: bool) -> Result<Customer, ClientHubError> {
        let customer = self
            .gate
            .write(|doc| {
                let customer = doc.customer_mut(id).ok_or_else(|| customer_not_found(id))?;
                customer.set_active(active);
                Ok(customer.clone())
            })
            .await?;
        tracing::info!(customer_id = %id, active, "customer activation changed");
        Ok(customer)
    }

    /// Delete a customer. Its interactions are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ClientHubError::NotFound`] when no customer with `id` exists,
    /// or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<Customer, ClientHubError> {
        let removed = self
            .gate
            .write(|doc| doc.remove_customer(id).ok_or_else(|| customer_not_found(id)))
            .await?;
        tracing::info!(customer_id = %id, "customer deleted");
        Ok(removed)
    }
}
