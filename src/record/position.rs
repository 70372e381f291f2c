//! Log record position
//!
//! The value half of every index entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical location of one record inside the log
///
/// Returned by value from every index operation, so callers can keep it
/// after the index has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogRecordPos {
    /// Id of the data file holding the record
    pub file_id: u32,

    /// Byte offset of the record within that file
    pub offset: i64,

    /// Encoded size of the record on disk
    pub size: u32,
}

impl LogRecordPos {
    pub fn new(file_id: u32, offset: i64, size: u32) -> Self {
        Self {
            file_id,
            offset,
            size,
        }
    }
}

impl fmt::Display for LogRecordPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file_id={}, offset={}, size={}",
            self.file_id, self.offset, self.size
        )
    }
}
