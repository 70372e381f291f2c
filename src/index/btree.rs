//! BTree index implementation
//!
//! BTreeMap-based index with a single RwLock for concurrency.

use std::collections::BTreeMap;
use std::ops::Bound;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::Result;
use crate::record::LogRecordPos;

use super::{BTreeIterator, IndexEntry, IndexIterator, Indexer, IteratorOptions};

/// Ordered in-memory index
///
/// ## Concurrency:
/// - `put` / `delete` / `close`: exclusive (write) lock
/// - `get` / `count`: shared (read) lock, so lookups never see a map
///   mid-mutation
/// - Iterator capture: shared lock for the full O(n) copy. Writers wait for
///   a time proportional to the index size while a snapshot is taken.
pub struct BTreeIndex {
    tree: RwLock<BTreeMap<Vec<u8>, LogRecordPos>>,
}

impl BTreeIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            tree: RwLock::new(BTreeMap::new()),
        }
    }

    /// Copy matching entries out of the map in iteration order
    fn capture(
        tree: &BTreeMap<Vec<u8>, LogRecordPos>,
        prefix: &[u8],
        reverse: bool,
    ) -> Vec<IndexEntry> {
        let mut entries = if prefix.is_empty() {
            let mut all = Vec::with_capacity(tree.len());
            all.extend(tree.iter().map(|(key, pos)| IndexEntry {
                key: key.clone(),
                pos: *pos,
            }));
            all
        } else {
            tree.range::<[u8], _>((Bound::Included(prefix), Bound::Unbounded))
                .take_while(|(key, _)| key.starts_with(prefix))
                .map(|(key, pos)| IndexEntry {
                    key: key.clone(),
                    pos: *pos,
                })
                .collect()
        };

        if reverse {
            entries.reverse();
        }
        entries
    }
}

impl Default for BTreeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Indexer for BTreeIndex {
    fn put(&self, key: Vec<u8>, pos: LogRecordPos) -> Option<LogRecordPos> {
        let key_len = key.len();
        let old = self.tree.write().insert(key, pos);
        trace!(key_len, replaced = old.is_some(), %pos, "index put");
        old
    }

    fn get(&self, key: &[u8]) -> Option<LogRecordPos> {
        self.tree.read().get(key).copied()
    }

    fn delete(&self, key: &[u8]) -> (Option<LogRecordPos>, bool) {
        let old = self.tree.write().remove(key);
        trace!(key_len = key.len(), found = old.is_some(), "index delete");
        match old {
            Some(pos) => (Some(pos), true),
            None => (None, false),
        }
    }

    fn count(&self) -> usize {
        self.tree.read().len()
    }

    fn iterator_with(&self, options: &IteratorOptions) -> Box<dyn IndexIterator> {
        let entries = {
            let tree = self.tree.read();
            Self::capture(&tree, &options.prefix, options.reverse)
        };

        debug!(
            entries = entries.len(),
            reverse = options.reverse,
            prefix_len = options.prefix.len(),
            "captured index snapshot"
        );

        Box::new(BTreeIterator::new(entries, options.reverse))
    }

    fn close(&self) -> Result<()> {
        let released = std::mem::take(&mut *self.tree.write());
        debug!(entries = released.len(), "closed btree index");
        Ok(())
    }
}
