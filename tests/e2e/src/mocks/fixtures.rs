//! Test Data Factory
//!
//! Provides utilities for generating realistic test data:
//! - Review statuses at any point of the level ladder
//! - Small catalogs with predictable ids
//! - Persisted documents in the web application's format

use soundeasy_core::{
    next_review_state, PhoneticCatalog, PhoneticCategory, PhoneticSymbol, Rating, ReviewStatus,
    StatusMap, SymbolKind, Timestamp,
};

/// One minute in milliseconds
pub const MINUTE: Timestamp = 60_000;
/// One hour in milliseconds
pub const HOUR: Timestamp = 60 * MINUTE;
/// One day in milliseconds
pub const DAY: Timestamp = 24 * HOUR;

/// Factory for creating test data
///
/// # Example
///
/// ```rust,ignore
/// let status = TestDataFactory::reviewed("θ", &[Rating::Good, Rating::Easy], 0);
/// assert_eq!(status.level, 3);
/// ```
pub struct TestDataFactory;

impl TestDataFactory {
    // ========================================================================
    // STATUSES
    // ========================================================================

    /// Status after applying `ratings` in order, all at time `at`
    pub fn reviewed(id: &str, ratings: &[Rating], at: Timestamp) -> ReviewStatus {
        ratings.iter().fold(ReviewStatus::new(id), |status, &rating| {
            next_review_state(&status, rating, at).expect("fixture rating failed")
        })
    }

    /// Status at `level` that becomes due at `due_at`
    ///
    /// History holds one entry per level, the last at `due_at - 1`.
    pub fn at_level(id: &str, level: u8, due_at: Timestamp) -> ReviewStatus {
        if level == 0 {
            return ReviewStatus::new(id);
        }
        let last = due_at - 1;
        ReviewStatus {
            level,
            next_review_at: due_at,
            last_reviewed_at: last,
            rating_history: vec![last; usize::from(level)],
            ..ReviewStatus::new(id)
        }
    }

    /// `count` statuses spread over every level, ids `item-0..`
    pub fn ladder(count: usize, due_at: Timestamp) -> Vec<ReviewStatus> {
        (0..count)
            .map(|i| Self::at_level(&format!("item-{i}"), (i % 10) as u8, due_at + i as i64))
            .collect()
    }

    /// Index statuses by id
    pub fn to_map(statuses: impl IntoIterator<Item = ReviewStatus>) -> StatusMap {
        statuses
            .into_iter()
            .map(|s| (s.item_id.clone(), s))
            .collect()
    }

    // ========================================================================
    // CATALOGS
    // ========================================================================

    /// Single-category catalog where every symbol has a recording
    pub fn catalog(symbols: &[&str]) -> PhoneticCatalog {
        PhoneticCatalog::from_categories(vec![PhoneticCategory {
            key: "fixture".to_string(),
            title: "Fixture".to_string(),
            kind: SymbolKind::Consonant,
            symbols: symbols
                .iter()
                .map(|s| PhoneticSymbol {
                    symbol: s.to_string(),
                    audio_file: Some(format!("/audio/fixture_{s}.mp3")),
                })
                .collect(),
        }])
        .expect("fixture catalog is valid")
    }

    // ========================================================================
    // DOCUMENTS
    // ========================================================================

    /// A progress document as the web application writes it
    pub fn web_document() -> String {
        serde_json::json!({
            "ɪ": {"symbol": "ɪ", "level": 3, "nextReview": 1_700_043_200_000_i64, "lastReview": 1_700_000_000_000_i64, "history": [1_699_900_000_000_i64, 1_699_950_000_000_i64, 1_700_000_000_000_i64]},
            "e": {"symbol": "e", "level": 1, "nextReview": 1_700_000_060_000_i64, "lastReview": 1_700_000_000_000_i64, "history": [1_700_000_000_000_i64]},
            "æ": {"symbol": "æ", "level": 0, "nextReview": 0, "lastReview": 0, "history": []}
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundeasy_core::ItemCatalog;

    #[test]
    fn test_reviewed_fixture() {
        let status = TestDataFactory::reviewed("θ", &[Rating::Good, Rating::Easy], 0);
        assert_eq!(status.level, 3);
        assert_eq!(status.review_count(), 2);
    }

    #[test]
    fn test_ladder_is_valid() {
        let statuses = TestDataFactory::ladder(25, DAY);
        assert_eq!(statuses.len(), 25);
        assert!(statuses.iter().all(|s| s.validate().is_ok()));
        assert_eq!(statuses.iter().filter(|s| s.is_new()).count(), 3);
    }

    #[test]
    fn test_catalog_fixture() {
        let catalog = TestDataFactory::catalog(&["x", "y"]);
        assert_eq!(catalog.known_item_ids(), vec!["x".to_string(), "y".to_string()]);
        assert_eq!(catalog.audio_file("y"), Some("/audio/fixture_y.mp3"));
    }
}
