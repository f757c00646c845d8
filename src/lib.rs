//! rentfolio is the local record store behind a rental property management
//! app: landlords track properties and tenants, tenants submit maintenance
//! requests and pay rent.
//!
//! Four record collections (tenants, properties, maintenance requests and
//! rent payments) are persisted as JSON arrays under fixed string keys in a
//! local key-value backend. A screen loads a collection, mutates one record
//! and saves the whole list back; relationships between collections are soft
//! id references resolved by linear scan at read time.
//!
//! The UI layer is an external collaborator: it calls through
//! [`RecordStore`] and holds no persistence logic of its own.

pub mod error;
pub mod ids;
pub mod records;
pub mod session;
pub mod storage;
pub mod store;

pub use error::{Result, StoreError};
pub use storage::{KeyValueStorage, MemoryStorage, SledStorage};
pub use store::RecordStore;
