//! Interaction — a timestamped event tied to one customer.

use serde::{Deserialize, Serialize};

use crate::fields::{Fields, without_reserved};
use crate::id::{CustomerId, InteractionId};
use crate::time::{Timestamp, iso_millis};

/// An interaction (`interacción`) logged against a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: InteractionId,
    #[serde(rename = "clienteId")]
    pub customer_id: CustomerId,
    #[serde(flatten)]
    pub fields: Fields,
    #[serde(rename = "fecha", with = "iso_millis")]
    pub date: Timestamp,
}

impl Interaction {
    /// Keys owned by the server; callers cannot set them at creation.
    pub const RESERVED: &'static [&'static str] = &["id", "clienteId", "fecha"];

    /// Build a new interaction dated `date`.
    #[must_use]
    pub fn new(
        id: InteractionId,
        customer_id: CustomerId,
        fields: Fields,
        date: Timestamp,
    ) -> Self {
        Self {
            id,
            customer_id,
            fields: without_reserved(fields, Self::RESERVED),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn should_ignore_client_supplied_date_and_owner() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let interaction = Interaction::new(
            InteractionId::new(1),
            CustomerId::new(2),
            fields(json!({"tipo": "llamada", "fecha": "1999-01-01", "clienteId": 77})),
            at,
        );
        assert_eq!(interaction.customer_id, CustomerId::new(2));
        assert_eq!(interaction.date, at);
        assert_eq!(interaction.fields.len(), 1);
    }

    #[test]
    fn should_serialize_with_wire_names() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let interaction = Interaction::new(
            InteractionId::new(1),
            CustomerId::new(2),
            fields(json!({"tipo": "email"})),
            at,
        );
        let json = serde_json::to_string(&interaction).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"clienteId":2,"tipo":"email","fecha":"2024-01-02T03:04:05.000Z"}"#
        );
    }

    #[test]
    fn should_parse_stored_record() {
        let raw = r#"{"id":3,"clienteId":1,"nota":"hola","fecha":"2024-01-02T03:04:05.123Z"}"#;
        let interaction: Interaction = serde_json::from_str(raw).unwrap();
        assert_eq!(interaction.id, InteractionId::new(3));
        assert_eq!(interaction.customer_id, CustomerId::new(1));
        assert_eq!(interaction.fields["nota"], "hola");
    }
}
