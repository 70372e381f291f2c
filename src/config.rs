//! Configuration for keydir
//!
//! Selects the index backend at construction time.

use std::fmt;
use std::str::FromStr;

use crate::error::IndexError;

/// Main configuration for an index instance
#[derive(Debug, Clone, Default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Backend Configuration
    // -------------------------------------------------------------------------
    /// Which in-memory structure backs the index
    pub index_type: IndexType,
}

/// Index backend variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexType {
    /// Ordered map under a single RwLock
    #[default]
    BTree,
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexType::BTree => write!(f, "btree"),
        }
    }
}

impl FromStr for IndexType {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "btree" => Ok(IndexType::BTree),
            other => Err(IndexError::Config(format!(
                "unknown index type: {:?}",
                other
            ))),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the index backend
    pub fn index_type(mut self, index_type: IndexType) -> Self {
        self.config.index_type = index_type;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
