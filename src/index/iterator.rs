//! Snapshot iterator
//!
//! Owned, sorted copy of the index plus an integer cursor.

use crate::error::{IndexError, Result};
use crate::record::LogRecordPos;

use super::{IndexEntry, IndexIterator};

/// Point-in-time iterator over a BTreeIndex
///
/// States:
/// - Active: `cursor < len`
/// - Exhausted: `cursor == len` (seek found nothing, or walked off the end)
/// - Closed: `entries` released; only `close()` is still allowed
pub struct BTreeIterator {
    /// Captured entries in iteration order, `None` once closed
    entries: Option<Vec<IndexEntry>>,

    cursor: usize,

    /// Entries are in descending key order
    reverse: bool,
}

impl BTreeIterator {
    /// Wrap entries already sorted in the requested direction
    pub(super) fn new(entries: Vec<IndexEntry>, reverse: bool) -> Self {
        Self {
            entries: Some(entries),
            cursor: 0,
            reverse,
        }
    }

    fn entries(&self) -> Result<&[IndexEntry]> {
        self.entries.as_deref().ok_or(IndexError::IteratorClosed)
    }

    fn current(&self) -> Result<&IndexEntry> {
        let entries = self.entries()?;
        entries
            .get(self.cursor)
            .ok_or(IndexError::IteratorOutOfRange {
                cursor: self.cursor,
                len: entries.len(),
            })
    }
}

impl IndexIterator for BTreeIterator {
    fn rewind(&mut self) -> Result<()> {
        self.entries()?;
        self.cursor = 0;
        Ok(())
    }

    fn seek(&mut self, key: &[u8]) -> Result<()> {
        let entries = self.entries()?;
        // Both predicates stay monotonic over the array's own order.
        self.cursor = if self.reverse {
            entries.partition_point(|entry| entry.key.as_slice() > key)
        } else {
            entries.partition_point(|entry| entry.key.as_slice() < key)
        };
        Ok(())
    }

    fn next(&mut self) -> Result<()> {
        let len = self.entries()?.len();
        if self.cursor < len {
            self.cursor += 1;
        }
        Ok(())
    }

    fn valid(&self) -> Result<bool> {
        Ok(self.cursor < self.entries()?.len())
    }

    fn key(&self) -> Result<&[u8]> {
        Ok(&self.current()?.key)
    }

    fn value(&self) -> Result<LogRecordPos> {
        Ok(self.current()?.pos)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.entries()?.is_empty())
    }

    fn is_reverse(&self) -> Result<bool> {
        self.entries()?;
        Ok(self.reverse)
    }

    fn close(&mut self) {
        self.entries = None;
        self.cursor = 0;
    }
}
