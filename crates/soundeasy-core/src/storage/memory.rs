//! In-process text storage

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Result, StorageError, TextStorage};

/// [`TextStorage`] kept in a `HashMap`
///
/// An optional byte quota makes writes fail the way browser storage does
/// when full, which is how callers exercise their write-failure paths.
#[derive(Debug, Default)]
pub struct MemoryTextStorage {
    documents: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryTextStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total bytes held
    pub fn used_bytes(&self) -> usize {
        self.documents
            .lock()
            .map(|docs| docs.iter().map(|(k, v)| k.len() + v.len()).sum())
            .unwrap_or(0)
    }
}

impl TextStorage for MemoryTextStorage {
    fn read_text(&self, key: &str) -> Result<Option<String>> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| StorageError::Poisoned("memory documents".into()))?;
        Ok(documents.get(key).cloned())
    }

    fn write_text(&self, key: &str, value: &str) -> Result<()> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| StorageError::Poisoned("memory documents".into()))?;

        if let Some(quota) = self.quota_bytes {
            let others: usize = documents
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        documents.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
