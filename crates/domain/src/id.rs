//! Typed integer identifier newtypes.
//!
//! Identifiers are plain integers on the wire (`"id": 3`). They are assigned
//! by the [`Document`](crate::document::Document) when a record is created.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::parse_leading_int;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw integer.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// The identifier that follows this one.
            #[must_use]
            pub const fn next(self) -> Self {
                Self(self.0.saturating_add(1))
            }

            /// Parse an identifier from a path segment, accepting trailing
            /// garbage the way a lenient integer parse does.
            #[must_use]
            pub fn parse_lenient(input: &str) -> Option<Self> {
                parse_leading_int(input).map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Customer`](crate::customer::Customer).
    CustomerId
);

define_id!(
    /// Unique identifier for an [`Interaction`](crate::interaction::Interaction).
    InteractionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&CustomerId::new(5)).unwrap();
        assert_eq!(json, "5");
        let parsed: CustomerId = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, CustomerId::new(5));
    }

    #[test]
    fn should_parse_path_segment_leniently() {
        assert_eq!(CustomerId::parse_lenient("12"), Some(CustomerId::new(12)));
        assert_eq!(CustomerId::parse_lenient("12abc"), Some(CustomerId::new(12)));
        assert_eq!(CustomerId::parse_lenient("abc"), None);
    }

    #[test]
    fn should_return_following_id() {
        assert_eq!(InteractionId::new(1).next(), InteractionId::new(2));
    }

    #[test]
    fn should_display_inner_value() {
        assert_eq!(CustomerId::new(42).to_string(), "42");
    }
}
