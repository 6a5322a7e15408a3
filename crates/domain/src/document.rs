//! Document — the single persisted root holding every customer and interaction.
//!
//! Collections are kept in insertion order, which is also the listing order.
//! All lookups are linear scans.

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::fields::Fields;
use crate::id::{CustomerId, InteractionId};
use crate::interaction::Interaction;
use crate::time::Timestamp;

/// Root persisted object: `{ "clientes": [...], "interacciones": [...] }`.
///
/// Both arrays are required when parsing. Unknown top-level keys are kept so
/// that rewriting the document does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "clientes")]
    pub customers: Vec<Customer>,
    #[serde(rename = "interacciones")]
    pub interactions: Vec<Interaction>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Document {
    /// One past the highest customer id, or 1 when there are none.
    #[must_use]
    pub fn next_customer_id(&self) -> CustomerId {
        self.customers
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(CustomerId::new(1), CustomerId::next)
    }

    /// One past the highest interaction id, or 1 when there are none.
    #[must_use]
    pub fn next_interaction_id(&self) -> InteractionId {
        self.interactions
            .iter()
            .map(|i| i.id)
            .max()
            .map_or(InteractionId::new(1), InteractionId::next)
    }

    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id == id)
    }

    /// Create and append a customer, returning a copy of the stored record.
    pub fn insert_customer(&mut self, fields: Fields) -> Customer {
        let customer = Customer::new(self.next_customer_id(), fields);
        self.customers.push(customer.clone());
        customer
    }

    /// Remove the first customer with `id`. Its interactions are left in place.
    pub fn remove_customer(&mut self, id: CustomerId) -> Option<Customer> {
        let index = self.customers.iter().position(|c| c.id == id)?;
        Some(self.customers.remove(index))
    }

    /// Interactions owned by `customer_id`, in document order.
    pub fn interactions_of(&self, customer_id: CustomerId) -> impl Iterator<Item = &Interaction> {
        self.interactions
            .iter()
            .filter(move |i| i.customer_id == customer_id)
    }

    /// Create and append an interaction, returning a copy of the stored record.
    ///
    /// The caller is responsible for checking that the customer exists.
    pub fn insert_interaction(
        &mut self,
        customer_id: CustomerId,
        fields: Fields,
        date: Timestamp,
    ) -> Interaction {
        let interaction = Interaction::new(self.next_interaction_id(), customer_id, fields, date);
        self.interactions.push(interaction.clone());
        interaction
    }
}
