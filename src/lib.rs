//! # keydir
//!
//! The in-memory index of a log-structured key-value store:
//! - Maps every live key to the position of its latest record in the log
//! - Sorted by byte-wise key order for cheap range scans
//! - Single coarse RwLock (exclusive writers, shared readers)
//! - Snapshot iterators isolated from later writes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │        Log Writer / Rebuild Driver / Compaction              │
//! │                   (external callers)                         │
//! └──────────┬───────────────────────────────────┬──────────────┘
//!            │ put / get / delete                │ iterator(reverse)
//!            ▼                                   ▼
//!   ┌──────────────────┐   capture (read)   ┌──────────────────┐
//!   │    BTreeIndex    │ ─────────────────▶ │  BTreeIterator   │
//!   │ RwLock<BTreeMap> │                    │ Vec + cursor     │
//!   └──────────────────┘                    └──────────────────┘
//!            │
//!            ▼
//!   ┌──────────────────┐
//!   │   LogRecordPos   │
//!   │ file/offset/size │
//!   └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod index;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{IndexError, Result};
pub use config::{Config, IndexType};
pub use index::{new_indexer, BTreeIndex, IndexIterator, Indexer, IteratorOptions};
pub use record::LogRecordPos;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of keydir
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
