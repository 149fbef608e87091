//! # Record Store
//!
//! The poem collection and the store facade over it.
//!
//! `Collection` is the seam between request handling and storage. Two
//! backends implement it: `MemoryCollection` (tests and data-path-less runs)
//! and `FileCollection` (JSON snapshot on disk). `PoemStore` sits on top,
//! owning id assignment and the operations handlers call.

mod collection;
mod errors;
mod file;
mod memory;
mod poems;
mod record;

pub use collection::Collection;
pub use errors::{StoreError, StoreResult};
pub use file::FileCollection;
pub use memory::MemoryCollection;
pub use poems::PoemStore;
pub use record::StoredPoem;
