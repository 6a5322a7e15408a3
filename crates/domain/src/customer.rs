//! Customer — a client record with an activation flag.

use serde::{Deserialize, Serialize};

use crate::fields::{Fields, without_reserved};
use crate::id::CustomerId;

/// A customer (`cliente`).
///
/// Apart from `id` and `activo`, every field is whatever the caller sent at
/// creation time. Those fields are stored as-is and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(flatten)]
    pub fields: Fields,
    #[serde(rename = "activo")]
    pub active: bool,
}

impl Customer {
    /// Keys owned by the server; callers cannot set them at creation.
    pub const RESERVED: &'static [&'static str] = &["id", "activo"];

    /// Build a new, active customer from caller-supplied fields.
    #[must_use]
    pub fn new(id: CustomerId, fields: Fields) -> Self {
        Self {
            id,
            fields: without_reserved(fields, Self::RESERVED),
            active: true,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
