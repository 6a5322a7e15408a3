//! Free-form record fields supplied by callers.
//!
//! Customers and interactions carry whatever keys the client sent. The
//! server owns a handful of keys per record kind and strips them from the
//! caller's map before storing it.

use serde_json::{Map, Value};

/// Caller-supplied key/value pairs, kept in insertion order.
pub type Fields = Map<String, Value>;

/// Remove every key in `reserved` from `fields`, keeping the order of the rest.
#[must_use]
pub fn without_reserved(mut fields: Fields, reserved: &[&str]) -> Fields {
    for key in reserved {
        fields.shift_remove(*key);
    }
    fields
}
