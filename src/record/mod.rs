//! Log Record Module
//!
//! Value types shared with the log layer.
//!
//! ## Responsibilities
//! - Describe where a record's bytes live in the append-only log
//! - Stay opaque to the index (stored and returned, never interpreted)
//!
//! ## Position Layout
//! ```text
//! ┌─────────────┬──────────────┬─────────────┐
//! │ FileId (4)  │ Offset (8)   │ Size (4)    │
//! └─────────────┴──────────────┴─────────────┘
//! ```

mod position;

pub use position::LogRecordPos;
