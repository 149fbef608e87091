//! File-backed collection
//!
//! The whole collection lives in one JSON snapshot: an array of records,
//! loaded at open and rewritten after every mutation. Writes use the atomic
//! pattern (write temp file, fsync, rename) so a crash mid-write leaves the
//! previous snapshot intact.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::collection::Collection;
use super::errors::{StoreError, StoreResult};
use super::record::StoredPoem;

/// Collection persisted as a single JSON snapshot file
pub struct FileCollection {
    snapshot_path: PathBuf,
    temp_path: PathBuf,
    records: RwLock<BTreeMap<i64, StoredPoem>>,
}

impl FileCollection {
    /// Open a collection at the given snapshot path
    ///
    /// A missing file is an empty collection; it is created on the first
    /// mutation.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let snapshot_path = path.into();
        let temp_path = temp_path_for(&snapshot_path);

        let records = match fs::read(&snapshot_path) {
            Ok(bytes) => {
                let poems: Vec<StoredPoem> = serde_json::from_slice(&bytes)?;
                poems.into_iter().map(|p| (p.id, p)).collect()
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(Self {
            snapshot_path,
            temp_path,
            records: RwLock::new(records),
        })
    }

    /// The snapshot path this collection persists to
    pub fn path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Write a snapshot of the given state atomically
    fn persist(&self, records: &BTreeMap<i64, StoredPoem>) -> StoreResult<()> {
        let poems: Vec<&StoredPoem> = records.values().collect();
        let content = serde_json::to_string_pretty(&poems)?;

        if let Some(parent) = self.snapshot_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        fs::rename(&self.temp_path, &self.snapshot_path)?;

        // Make the rename itself durable
        if let Some(parent) = self.snapshot_path.parent() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

/// Sibling temp path used during atomic writes
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl Collection for FileCollection {
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

        // Commit to memory only once the snapshot is on disk, so a failed
        // write leaves memory and file agreeing
        let mut next = records.clone();
        next.insert(poem.id, poem);
        self.persist(&next)?;
        *records = next;

        Ok(())
    }

    fn replace_one(&self, poem: StoredPoem) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        if !records.contains_key(&poem.id) {
            return Ok(false);
        }

        let mut next = records.clone();
        next.insert(poem.id, poem);
        self.persist(&next)?;
        *records = next;

        Ok(true)
    }

    fn delete_one(&self, id: i64) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        if !records.contains_key(&id) {
            return Ok(false);
        }

        let mut next = records.clone();
        next.remove(&id);
        self.persist(&next)?;
        *records = next;

        Ok(true)
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}
