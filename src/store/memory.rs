//! In-memory collection backend
//!
//! Backs tests and data-path-less runs. An ordered map keeps the scan in
//! ascending-id order for free.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::collection::Collection;
use super::errors::{StoreError, StoreResult};
use super::record::StoredPoem;

/// In-memory collection backed by an ordered map
#[derive(Default)]
pub struct MemoryCollection {
    records: RwLock<BTreeMap<i64, StoredPoem>>,
}

impl MemoryCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collection for MemoryCollection {
    fn find_one(&self, id: i64) -> StoreResult<Option<StoredPoem>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(&id).cloned())
    }

    fn scan(&self, limit: usize) -> StoreResult<Vec<StoredPoem>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.values().take(limit).cloned().collect())
    }

    fn insert_one(&self, poem: StoredPoem) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        if records.contains_key(&poem.id) {
            return Err(StoreError::DuplicateId(poem.id));
        }
        records.insert(poem.id, poem);
        Ok(())
    }

    fn replace_one(&self, poem: StoredPoem) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        match records.get_mut(&poem.id) {
            Some(slot) => {
                *slot = poem;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_one(&self, id: i64) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.remove(&id).is_some())
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}
