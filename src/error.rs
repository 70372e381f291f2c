//! Error types for keydir
//!
//! A missing key is never an error: lookups and deletes report absence
//! through `Option`. The variants below cover API misuse and teardown.

use thiserror::Error;

/// Result type alias using IndexError
pub type Result<T> = std::result::Result<T, IndexError>;

/// Unified error type for index operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    // -------------------------------------------------------------------------
    // Iterator Misuse
    // -------------------------------------------------------------------------
    #[error("Iterator out of range: cursor {cursor}, length {len}")]
    IteratorOutOfRange { cursor: usize, len: usize },

    #[error("Iterator is closed")]
    IteratorClosed,

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------
    #[error("Failed to close index: {0}")]
    Close(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
