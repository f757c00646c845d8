//! Typed identifiers for the record collections.
//!
//! Every record is addressed by a client-side generated id (a random UUID v4
//! rendered as a string). Ids are opaque: the store compares them for
//! equality and never parses them back. Each collection gets its own newtype
//! so a tenant id cannot be handed to a property lookup by accident.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

record_id! {
    /// Identifier of a [`Tenant`](crate::records::Tenant) record.
    TenantId
}

record_id! {
    /// Identifier of a [`Property`](crate::records::Property) record.
    PropertyId
}

record_id! {
    /// Identifier of a
    /// [`MaintenanceRequest`](crate::records::MaintenanceRequest) record.
    RequestId
}

record_id! {
    /// Identifier of a [`RentPayment`](crate::records::RentPayment) record.
    PaymentId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let first = TenantId::generate();
        let second = TenantId::generate();
        assert_ne!(first, second);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = PropertyId::from("prop-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"prop-1\"");

        let back: PropertyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
