//! Record types for the four persisted collections.
//!
//! Each entity is a flat record serialized with the camelCase field names the
//! app has always written (`tenantId`, `imageUri`, ...), so existing stored
//! data keeps loading. Required fields carry no serde default: a stored
//! record missing one fails decoding instead of materializing half-empty.
//!
//! The [`Collection`] trait binds an entity to the well-known storage key
//! holding its JSON array and to its identifier type.

mod maintenance;
mod payment;
mod property;
mod tenant;

pub use maintenance::{MaintenanceRequest, Priority, RequestStatus};
pub use payment::{current_month, PaymentStatus, RentPayment};
pub use property::Property;
pub use tenant::Tenant;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

use crate::error::Result;

/// A record type persisted as one JSON array under a fixed storage key.
pub trait Collection:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Identifier type for records of this collection.
    type Id: PartialEq + fmt::Display;

    /// Well-known key the collection's JSON array is stored under.
    const STORAGE_KEY: &'static str;

    fn id(&self) -> &Self::Id;

    /// Checks required fields before the record is written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`](crate::error::StoreError) when a
    /// required field is missing or malformed; nothing is written in that
    /// case.
    fn validate(&self) -> Result<()>;
}
