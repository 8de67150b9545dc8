//! Review Status - The per-item scheduling record
//!
//! Each status tracks one learnable item (a phonetic symbol) with:
//! - Mastery level on the fixed interval ladder
//! - Next/last review timestamps (epoch milliseconds)
//! - Append-only rating history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::srs::MAX_LEVEL;

/// Stable identifier of a learnable item (the phonetic symbol itself)
pub type ItemId = String;

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> Timestamp {
    Utc::now().timestamp_millis()
}

// ============================================================================
// REVIEW STATUS
// ============================================================================

/// Scheduling state of a single item
///
/// Persisted field names (`symbol`, `nextReview`, `lastReview`, `history`)
/// match the documents written by the web application, so existing
/// progress can be imported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStatus {
    /// Item identifier
    #[serde(rename = "symbol")]
    pub item_id: ItemId,
    /// Mastery level, 0 (new) to [`MAX_LEVEL`]
    pub level: u8,
    /// Eligible for review once `now >= next_review_at`; 0 while new
    #[serde(rename = "nextReview")]
    pub next_review_at: Timestamp,
    /// Time of the last applied rating; 0 if never reviewed
    #[serde(rename = "lastReview")]
    pub last_reviewed_at: Timestamp,
    /// Timestamps of every applied rating, oldest first
    #[serde(rename = "history", default)]
    pub rating_history: Vec<Timestamp>,
}

impl ReviewStatus {
    /// Fresh status for an item that has never been reviewed
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            level: 0,
            next_review_at: 0,
            last_reviewed_at: 0,
            rating_history: Vec::new(),
        }
    }

    /// Never reviewed (level 0)
    pub fn is_new(&self) -> bool {
        self.level == 0
    }

    /// Learned and past its next-review time
    ///
    /// New items are never due; they form their own bucket.
    pub fn is_due_at(&self, now: Timestamp) -> bool {
        !self.is_new() && self.next_review_at <= now
    }

    /// Number of ratings applied so far
    pub fn review_count(&self) -> usize {
        self.rating_history.len()
    }

    /// Next review time as a UTC datetime, `None` for new items
    pub fn next_review_datetime(&self) -> Option<DateTime<Utc>> {
        if self.is_new() {
            return None;
        }
        DateTime::from_timestamp_millis(self.next_review_at)
    }

    /// Last review time as a UTC datetime, `None` if never reviewed
    pub fn last_reviewed_datetime(&self) -> Option<DateTime<Utc>> {
        if self.last_reviewed_at == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.last_reviewed_at)
    }

    /// Check the structural invariants of a status read from storage
    pub fn validate(&self) -> Result<(), String> {
        if self.level > MAX_LEVEL {
            return Err(format!(
                "{}: level {} exceeds maximum {}",
                self.item_id, self.level, MAX_LEVEL
            ));
        }
        if self.level > 0 && self.next_review_at == 0 {
            return Err(format!(
                "{}: level {} with no next review time",
                self.item_id, self.level
            ));
        }
        if self.next_review_at < 0 || self.last_reviewed_at < 0 {
            return Err(format!("{}: negative timestamp", self.item_id));
        }
        Ok(())
    }
}
