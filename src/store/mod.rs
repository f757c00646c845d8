//! The record store: loads, joins and persists the four record collections
//! against a [`KeyValueStorage`] backend.
//!
//! Every collection is one JSON array under its well-known key. Writes are
//! whole-list replacements: an operation loads the array, mutates one
//! element and saves the full array back. The store is stateless between
//! calls; all state lives in the backend. Concurrent saves to the same key
//! are not coordinated, so of two racing writers the later one wins.

mod views;

pub use views::{PropertyOverview, RequestDetails};

use log::{error, info};

use crate::error::{Result, StoreError};
use crate::records::Collection;
use crate::storage::KeyValueStorage;

/// Thin persistence and query layer over a key-value backend.
pub struct RecordStore<S> {
    storage: S,
}

impl<S> RecordStore<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: S) -> Self {
        RecordStore { storage }
    }

    /// Loads the full collection for record type `R`.
    ///
    /// A key that has never been written yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] when the stored value is not a valid
    /// JSON array of `R`, and [`StoreError::Io`] when the backend fails.
    pub async fn load<R: Collection>(&self) -> Result<Vec<R>> {
        match self.storage.get(R::STORAGE_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                StoreError::Parse { key: R::STORAGE_KEY.to_owned(), source }
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Like [`load`](Self::load), but an unreadable stored value is logged
    /// and recovered as an empty list instead of failing the caller.
    ///
    /// This is the recovery policy the screens want: a corrupt collection
    /// must not take the whole view down. Callers that need to surface
    /// corruption use [`load`](Self::load) directly. Backend failures still
    /// propagate.
    pub async fn load_or_empty<R: Collection>(&self) -> Result<Vec<R>> {
        match self.load().await {
            Ok(records) => Ok(records),
            Err(err @ StoreError::Parse { .. }) => {
                error!("Discarding unreadable collection: {err}");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Serializes the full sequence and overwrites the collection's key.
    pub async fn save<R: Collection>(&self, records: &[R]) -> Result<()> {
        let raw = serde_json::to_string(records)
            .map_err(|e| StoreError::Io(e.to_string()))?;
        self.storage.set(R::STORAGE_KEY, raw).await?;
        info!(
            "Saved {} records under key: {}",
            records.len(),
            R::STORAGE_KEY
        );
        Ok(())
    }

    /// Appends a new record to its collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] before any write when the record
    /// fails field validation or its id is already taken.
    pub async fn create<R: Collection>(&self, record: R) -> Result<()> {
        record.validate()?;
        let mut records = self.load::<R>().await?;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(StoreError::Validation(format!(
                "record {} already exists under {}",
                record.id(),
                R::STORAGE_KEY
            )));
        }
        records.push(record);
        self.save(&records).await
    }

    /// Replaces the stored record carrying the same id, keeping its
    /// position in the list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] before any write when the record
    /// fails field validation or no stored record matches its id.
    pub async fn update<R: Collection>(&self, record: R) -> Result<()> {
        record.validate()?;
        let mut records = self.load::<R>().await?;
        match records.iter().position(|e| e.id() == record.id()) {
            Some(index) => records[index] = record,
            None => {
                return Err(StoreError::Validation(format!(
                    "no record {} to update under {}",
                    record.id(),
                    R::STORAGE_KEY
                )))
            }
        }
        self.save(&records).await
    }

    /// Create-or-replace by id: replaces the matching stored record in
    /// place, or appends when no record matches.
    ///
    /// Prefer [`create`](Self::create) and [`update`](Self::update) when the
    /// caller knows which case it is in; this combined form exists for
    /// flows that genuinely do not.
    pub async fn upsert_by_id<R: Collection>(&self, record: R) -> Result<()> {
        record.validate()?;
        let mut records = self.load::<R>().await?;
        match records.iter().position(|e| e.id() == record.id()) {
            Some(index) => records[index] = record,
            None => records.push(record),
        }
        self.save(&records).await
    }
}

/// Resolves a soft reference by linear scan.
///
/// Returns `None` when no record carries `id`, which is how a dangling
/// reference surfaces to callers.
pub fn find_by_id<'a, R: Collection>(
    records: &'a [R],
    id: &R::Id,
) -> Option<&'a R> {
    records.iter().find(|record| record.id() == id)
}

/// For each parent, attaches the child whose id the parent references, or
/// `None` when the reference is null or dangling.
pub fn join_by_reference<'a, P, C, F>(
    parents: &'a [P],
    children: &'a [C],
    reference: F,
) -> Vec<(&'a P, Option<&'a C>)>
where
    C: Collection,
    F: Fn(&P) -> Option<&C::Id>,
{
    parents
        .iter()
        .map(|parent| {
            let child =
                reference(parent).and_then(|id| find_by_id(children, id));
            (parent, child)
        })
        .collect()
}
