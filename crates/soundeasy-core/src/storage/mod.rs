//! Storage Module
//!
//! Persistence for learner progress:
//! - `TextStorage`: the narrow key/value text contract every backend meets
//! - SQLite backend with schema migrations (default)
//! - In-memory backend with an optional byte quota
//! - `ReviewStatusStore` on top of any backend

mod memory;
mod migrations;
mod sqlite;
mod store;

use std::sync::Arc;

pub use memory::MemoryTextStorage;
pub use migrations::{Migration, MIGRATIONS};
pub use sqlite::{SqliteTextStorage, DEFAULT_DB_FILE};
pub use store::{
    decode_statuses, encode_statuses, load_historical_stats, save_historical_stats,
    ReviewStatusStore, StatusMap, HISTORICAL_STATS_KEY, REVIEW_STATUS_KEY,
};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Storage error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Document could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Backend is out of space
    #[error("Storage quota exceeded: need {needed} bytes, quota is {quota}")]
    QuotaExceeded { needed: usize, quota: usize },
    /// Status rejected before it could corrupt the stored document
    #[error("Invalid review status: {0}")]
    InvalidStatus(String),
    /// A lock was poisoned by a panicking holder
    #[error("Lock poisoned: {0}")]
    Poisoned(String),
    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Storage result type
pub type Result<T> = std::result::Result<T, StorageError>;

// ============================================================================
// TEXT STORAGE CONTRACT
// ============================================================================

/// Durable key/value text storage
///
/// Implementations must let a read observe the most recent successful write
/// to the same key. Concurrent writers are last-write-wins.
pub trait TextStorage {
    /// Value stored under `key`, `None` if absent
    fn read_text(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write_text(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: TextStorage + ?Sized> TextStorage for &T {
    fn read_text(&self, key: &str) -> Result<Option<String>> {
        (**self).read_text(key)
    }

    fn write_text(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_text(key, value)
    }
}

impl<T: TextStorage + ?Sized> TextStorage for Arc<T> {
    fn read_text(&self, key: &str) -> Result<Option<String>> {
        (**self).read_text(key)
    }

    fn write_text(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_text(key, value)
    }
}

impl<T: TextStorage + ?Sized> TextStorage for Box<T> {
    fn read_text(&self, key: &str) -> Result<Option<String>> {
        (**self).read_text(key)
    }

    fn write_text(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_text(key, value)
    }
}
