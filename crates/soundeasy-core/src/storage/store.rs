//! Review Status Store
//!
//! Owns the item id → [`ReviewStatus`] mapping and mirrors every change to
//! a [`TextStorage`] backend as one JSON document.

use std::collections::BTreeMap;

use super::{Result, StorageError, TextStorage};
use crate::review::{HistoricalStats, ItemId, ReviewStatus};

/// Key of the review-status document
pub const REVIEW_STATUS_KEY: &str = "sound-easy-srs-data";

/// Key of the historical-stats document
pub const HISTORICAL_STATS_KEY: &str = "sound-easy-practice-stats";

/// Item id → status, ordered by id
pub type StatusMap = BTreeMap<ItemId, ReviewStatus>;

// ============================================================================
// ENCODING
// ============================================================================

/// Serialize a status mapping to its persisted JSON form
pub fn encode_statuses(statuses: &StatusMap) -> Result<String> {
    Ok(serde_json::to_string(statuses)?)
}

/// Parse a persisted status document
///
/// Fails when the JSON does not have the expected shape, when a map key
/// differs from its entry's id, or when an entry breaks a status invariant.
pub fn decode_statuses(text: &str) -> std::result::Result<StatusMap, String> {
    let statuses: StatusMap = serde_json::from_str(text).map_err(|e| e.to_string())?;
    for (key, status) in &statuses {
        if key != &status.item_id {
            return Err(format!(
                "entry key {:?} does not match item id {:?}",
                key, status.item_id
            ));
        }
        status.validate()?;
    }
    Ok(statuses)
}

// ============================================================================
// STORE
// ============================================================================

/// Durable mapping from item id to review status
///
/// Reads are served from memory. Every mutation updates memory first and
/// then writes the whole document; a failed write is returned to the caller
/// while the in-memory mapping keeps the new value. Until a later write
/// succeeds, [`load_all`](Self::load_all) keeps serving that mapping.
pub struct ReviewStatusStore<S> {
    storage: S,
    statuses: StatusMap,
    /// Memory holds changes the backend does not
    dirty: bool,
}

impl<S: TextStorage> ReviewStatusStore<S> {
    /// Open the store and load whatever the backend holds
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            statuses: StatusMap::new(),
            dirty: false,
        };
        store.reload();
        store
    }

    /// Reload the mapping from storage
    ///
    /// Missing, unreadable or malformed documents yield an empty mapping.
    /// After a failed write the in-memory mapping is newer than the stored
    /// document and is returned unchanged.
    pub fn load_all(&mut self) -> &StatusMap {
        if self.dirty {
            tracing::debug!(
                tracked = self.statuses.len(),
                "Keeping unsaved review data over stored document"
            );
        } else {
            self.reload();
        }
        &self.statuses
    }

    /// Whether the last write failed and memory is ahead of storage
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    fn reload(&mut self) {
        self.statuses = match self.storage.read_text(REVIEW_STATUS_KEY) {
            Ok(Some(text)) => match decode_statuses(&text) {
                Ok(statuses) => statuses,
                Err(e) => {
                    tracing::warn!("Discarding malformed review data: {}", e);
                    StatusMap::new()
                }
            },
            Ok(None) => StatusMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read review data: {}", e);
                StatusMap::new()
            }
        };
    }

    /// Insert a fresh status for every id not yet tracked
    ///
    /// Returns how many ids were added. Storage is written only when that
    /// number is non-zero.
    pub fn ensure_initialized<I, T>(&mut self, known_item_ids: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut inserted = 0;
        for id in known_item_ids {
            let id = id.as_ref();
            if !self.statuses.contains_key(id) {
                self.statuses.insert(id.to_string(), ReviewStatus::new(id));
                inserted += 1;
            }
        }

        if inserted > 0 {
            tracing::debug!(inserted, total = self.statuses.len(), "Initialized new items");
            self.persist()?;
        }
        Ok(inserted)
    }

    /// Status of one item
    pub fn get(&self, item_id: &str) -> Option<&ReviewStatus> {
        self.statuses.get(item_id)
    }

    /// Store `status` under its own item id, replacing any previous entry
    pub fn put(&mut self, status: ReviewStatus) -> Result<()> {
        status.validate().map_err(StorageError::InvalidStatus)?;
        self.statuses.insert(status.item_id.clone(), status);
        self.persist()
    }

    /// Drop every entry
    pub fn reset(&mut self) -> Result<()> {
        let cleared = self.statuses.len();
        self.statuses.clear();
        tracing::info!(cleared, "Review progress reset");
        self.persist()
    }

    /// All statuses in item-id order
    pub fn statuses(&self) -> impl Iterator<Item = &ReviewStatus> {
        self.statuses.values()
    }

    /// The full in-memory mapping
    pub fn as_map(&self) -> &StatusMap {
        &self.statuses
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Backend handle
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let result = encode_statuses(&self.statuses)
            .and_then(|text| self.storage.write_text(REVIEW_STATUS_KEY, &text));
        self.dirty = result.is_err();
        result
    }
}

// ============================================================================
// HISTORICAL STATS DOCUMENT
// ============================================================================

/// Read lifetime stats, falling back to zeroed stats on any failure
pub fn load_historical_stats<S: TextStorage + ?Sized>(storage: &S) -> HistoricalStats {
    match storage.read_text(HISTORICAL_STATS_KEY) {
        Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!("Discarding malformed practice stats: {}", e);
            HistoricalStats::default()
        }),
        Ok(None) => HistoricalStats::default(),
        Err(e) => {
            tracing::warn!("Failed to read practice stats: {}", e);
            HistoricalStats::default()
        }
    }
}

/// Write lifetime stats
pub fn save_historical_stats<S: TextStorage + ?Sized>(
    storage: &S,
    stats: &HistoricalStats,
) -> Result<()> {
    let text = serde_json::to_string(stats)?;
    storage.write_text(HISTORICAL_STATS_KEY, &text)
}
