//! Document collection seam
//!
//! The interface the store facade sits on. Backends provide atomic
//! single-record operations and an ascending-id scan; id assignment and
//! pagination math live above this seam.

use super::errors::StoreResult;
use super::record::StoredPoem;

/// Storage backend for the poem collection
pub trait Collection: Send + Sync {
    /// Exact lookup by primary key
    fn find_one(&self, id: i64) -> StoreResult<Option<StoredPoem>>;

    /// First `limit` records in ascending-id order
    fn scan(&self, limit: usize) -> StoreResult<Vec<StoredPoem>>;

    /// Insert a new record; the id must not already be taken
    fn insert_one(&self, poem: StoredPoem) -> StoreResult<()>;

    /// Replace the record carrying the same id
    ///
    /// Returns whether a record was actually replaced. An absent id is not
    /// an error.
    fn replace_one(&self, poem: StoredPoem) -> StoreResult<bool>;

    /// Remove the record with this id
    ///
    /// Returns whether a record was actually removed. An absent id is not
    /// an error.
    fn delete_one(&self, id: i64) -> StoreResult<bool>;

    /// Number of records currently stored
    fn count(&self) -> StoreResult<usize>;
}
