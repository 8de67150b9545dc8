//! Session and historical practice statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::srs::Rating;

// ============================================================================
// SESSION STATISTICS (ephemeral)
// ============================================================================

/// Count of ratings per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingTally {
    pub again: u32,
    pub hard: u32,
    pub good: u32,
    pub easy: u32,
}

impl RatingTally {
    /// Count one rating
    pub fn record(&mut self, rating: Rating) {
        match rating {
            Rating::Again => self.again += 1,
            Rating::Hard => self.hard += 1,
            Rating::Good => self.good += 1,
            Rating::Easy => self.easy += 1,
        }
    }

    /// Count for a single rating kind
    pub fn get(&self, rating: Rating) -> u32 {
        match rating {
            Rating::Again => self.again,
            Rating::Hard => self.hard,
            Rating::Good => self.good,
            Rating::Easy => self.easy,
        }
    }

    /// Sum over all kinds
    pub fn total(&self) -> u32 {
        self.again + self.hard + self.good + self.easy
    }
}

/// Per-session counters, rebuilt whenever a session starts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Ratings applied to items that were already learned
    pub reviewed: u32,
    /// Ratings applied to items leaving level 0 for the first time
    pub new_learned: u32,
    /// Ratings by kind
    pub ratings: RatingTally,
}

impl SessionStats {
    /// Record a rating for an item that was at `previous_level` before it
    pub fn record(&mut self, previous_level: u8, rating: Rating) {
        self.ratings.record(rating);
        if previous_level == 0 {
            self.new_learned += 1;
        } else {
            self.reviewed += 1;
        }
    }
}

/// Run of consecutive successful (non-`again`) ratings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

impl Streak {
    /// Advance on success, reset on failure
    pub fn record(&mut self, rating: Rating) {
        if rating.is_success() {
            self.current += 1;
            self.best = self.best.max(self.current);
        } else {
            self.current = 0;
        }
    }
}

// ============================================================================
// HISTORICAL STATISTICS (persisted)
// ============================================================================

/// Lifetime practice counters
///
/// Stored as its own document next to the review statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricalStats {
    /// Ratings ever applied
    pub total_questions: u64,
    /// Ratings that were not `again`
    pub total_correct: u64,
    /// Longest streak seen in any session
    pub all_time_best_streak: u32,
    /// Sessions started
    pub practice_count: u64,
    /// Start of the most recent session
    pub last_practice_date: Option<DateTime<Utc>>,
}

impl HistoricalStats {
    /// Note that a session started at `at`
    pub fn record_session_start(&mut self, at: DateTime<Utc>) {
        self.practice_count += 1;
        self.last_practice_date = Some(at);
    }

    /// Fold one rating and the session's best streak into the totals
    pub fn record_rating(&mut self, rating: Rating, session_best_streak: u32) {
        self.total_questions += 1;
        if rating.is_success() {
            self.total_correct += 1;
        }
        self.all_time_best_streak = self.all_time_best_streak.max(session_best_streak);
    }

    /// Fraction of correct ratings, 0.0 when nothing was rated
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            self.total_correct as f64 / self.total_questions as f64
        }
    }
}
