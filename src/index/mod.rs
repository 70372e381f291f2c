//! Index Module
//!
//! In-memory mapping from key to the log position of its latest value.
//!
//! ## Responsibilities
//! - Point lookups for the read path
//! - Insert/replace and delete, returning the superseded position
//! - Ordered snapshot iteration for scans, compaction, and rebuilds
//!
//! ## Backends
//! Every backend implements [`Indexer`] and is picked at construction time
//! through [`new_indexer`]. Only the BTreeMap backend exists today:
//! - Ordered keys (range scans need no sort)
//! - One RwLock around the whole map
//! - Hash, skip list, or radix tree backends can slot in behind the same trait
//!
//! ## Snapshot Iteration
//! ```text
//!   BTreeMap ──(read lock, O(n) copy)──▶ Vec<IndexEntry> + cursor
//! ```
//! The lock is released as soon as the copy is done; the iterator never
//! touches the live map again.

mod btree;
mod iterator;

pub use btree::BTreeIndex;
pub use iterator::BTreeIterator;

use crate::config::{Config, IndexType};
use crate::error::Result;
use crate::record::LogRecordPos;

/// One captured (key, position) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub key: Vec<u8>,
    pub pos: LogRecordPos,
}

/// Options for creating a snapshot iterator
#[derive(Debug, Clone, Default)]
pub struct IteratorOptions {
    /// Only capture keys starting with this prefix (empty = all keys)
    pub prefix: Vec<u8>,

    /// Iterate from the largest key down
    pub reverse: bool,
}

/// Capability interface shared by all index backends
///
/// All methods take `&self`; backends synchronize internally.
pub trait Indexer: Send + Sync {
    /// Insert or replace, returning the previous position if the key existed
    fn put(&self, key: Vec<u8>, pos: LogRecordPos) -> Option<LogRecordPos>;

    /// Look up the position of a key
    fn get(&self, key: &[u8]) -> Option<LogRecordPos>;

    /// Remove a key
    ///
    /// Returns `(None, false)` if the key was absent, otherwise
    /// `(Some(old), true)`.
    fn delete(&self, key: &[u8]) -> (Option<LogRecordPos>, bool);

    /// Number of live entries
    fn count(&self) -> usize;

    /// Snapshot iterator with direction and prefix options
    fn iterator_with(&self, options: &IteratorOptions) -> Box<dyn IndexIterator>;

    /// Snapshot iterator over every key
    fn iterator(&self, reverse: bool) -> Box<dyn IndexIterator> {
        self.iterator_with(&IteratorOptions {
            prefix: Vec::new(),
            reverse,
        })
    }

    /// Release backend resources
    ///
    /// All entries are dropped; the index stays usable but is empty
    /// afterwards. Snapshots taken earlier are unaffected.
    fn close(&self) -> Result<()>;
}

/// Cursor over an index snapshot
///
/// After `close()`, every other method returns `IndexError::IteratorClosed`.
pub trait IndexIterator: Send + Sync {
    /// Move back to the first entry in iteration order
    fn rewind(&mut self) -> Result<()>;

    /// Move to the first entry `>= key` (forward) or `<= key` (reverse)
    fn seek(&mut self, key: &[u8]) -> Result<()>;

    /// Advance to the next entry
    fn next(&mut self) -> Result<()>;

    /// Whether the cursor points at an entry
    fn valid(&self) -> Result<bool>;

    /// Key at the cursor
    fn key(&self) -> Result<&[u8]>;

    /// Position at the cursor
    fn value(&self) -> Result<LogRecordPos>;

    /// Number of captured entries
    fn len(&self) -> Result<usize>;

    /// Whether the snapshot captured no entries
    fn is_empty(&self) -> Result<bool>;

    /// Direction fixed at capture time
    fn is_reverse(&self) -> Result<bool>;

    /// Drop the captured entries; safe to call more than once
    fn close(&mut self);
}

/// Build the backend selected by `config`
pub fn new_indexer(config: &Config) -> Box<dyn Indexer> {
    match config.index_type {
        IndexType::BTree => Box::new(BTreeIndex::new()),
    }
}
