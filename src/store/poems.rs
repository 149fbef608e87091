//! # Poem Store
//!
//! The store facade handlers talk to. Owns the collection backend and id
//! assignment; one instance is built at startup and shared across requests.

use std::sync::atomic::{AtomicI64, Ordering};

use super::collection::Collection;
use super::errors::StoreResult;
use super::record::StoredPoem;

/// The poem store shared across requests
pub struct PoemStore<C: Collection> {
    collection: C,
    next_id: AtomicI64,
}

impl<C: Collection> PoemStore<C> {
    /// Open the store over a backend
    ///
    /// Seeds the id counter from a full ascending scan: one past the highest
    /// stored id, or 1 for an empty collection. The counter only moves
    /// forward, so within this handle's lifetime a deleted id is never
    /// handed out again.
    pub fn open(collection: C) -> StoreResult<Self> {
        let last_id = collection
            .scan(usize::MAX)?
            .last()
            .map(|p| p.id)
            .unwrap_or(0);

        Ok(Self {
            collection,
            next_id: AtomicI64::new(last_id + 1),
        })
    }

    /// Exact lookup by id
    pub fn get_one(&self, id: i64) -> StoreResult<Option<StoredPoem>> {
        self.collection.find_one(id)
    }

    /// First `limit` records in ascending-id order
    pub fn get_window(&self, limit: usize) -> StoreResult<Vec<StoredPoem>> {
        self.collection.scan(limit)
    }

    /// Insert a new poem under the next free id, returning the assigned id
    ///
    /// The counter advances even if the insert then fails, which can leave a
    /// gap in the sequence but never a collision.
    pub fn create(&self, author: String, title: String, poem: Vec<String>) -> StoreResult<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.collection.insert_one(StoredPoem {
            id,
            author,
            title,
            poem,
        })?;
        Ok(id)
    }

    /// Replace author/title/poem of the record with this id
    ///
    /// A missing id is not a failure; callers pre-check existence.
    pub fn update(&self, id: i64, author: String, title: String, poem: Vec<String>) -> StoreResult<()> {
        self.collection.replace_one(StoredPoem {
            id,
            author,
            title,
            poem,
        })?;
        Ok(())
    }

    /// Remove the record with this id
    ///
    /// A missing id is not a failure; callers pre-check existence.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.collection.delete_one(id)?;
        Ok(())
    }

    /// Current record count, recomputed on every call
    pub fn count(&self) -> StoreResult<i64> {
        Ok(self.collection.count()? as i64)
    }
}
