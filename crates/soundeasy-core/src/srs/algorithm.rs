//! Level-ladder scheduling functions
//!
//! All functions here are pure: they take the current time as an argument
//! and never touch storage.

use chrono::Duration;

use super::scheduler::{Rating, SchedulerError};
use crate::review::{ReviewStatus, Timestamp};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Highest mastery level
pub const MAX_LEVEL: u8 = 9;

/// Review interval in minutes for each level
///
/// Index 0 is unused by transitions: a rating always lands on level 1 or above.
pub const INTERVAL_TABLE: [u32; 10] = [
    0,              // new
    1,              // 1 minute
    10,             // 10 minutes
    12 * 60,        // 12 hours
    24 * 60,        // 1 day
    2 * 24 * 60,    // 2 days
    4 * 24 * 60,    // 4 days
    7 * 24 * 60,    // 1 week
    15 * 24 * 60,   // 15 days
    30 * 24 * 60,   // 30 days
];

/// Milliseconds per minute
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Default cap on new items introduced per session
pub const DEFAULT_MAX_NEW_PER_SESSION: usize = 10;

// ============================================================================
// TRANSITION
// ============================================================================

/// Level reached from `level` after `rating`
///
/// `hard` multiplies by 0.8 and floors; `level * 4 / 5` is the same value in
/// integer arithmetic.
pub fn next_level(level: u8, rating: Rating) -> Result<u8, SchedulerError> {
    if level > MAX_LEVEL {
        return Err(SchedulerError::LevelOutOfRange(level));
    }

    let next = match rating {
        Rating::Again => 1,
        Rating::Hard => (level * 4 / 5).max(1),
        Rating::Good => (level + 1).min(MAX_LEVEL),
        Rating::Easy => (level + 2).min(MAX_LEVEL),
    };
    Ok(next)
}

/// Review interval for `level`, in minutes
pub fn interval_minutes(level: u8) -> Option<u32> {
    INTERVAL_TABLE.get(usize::from(level)).copied()
}

/// Review interval for `level` as a duration
pub fn interval_for(level: u8) -> Option<Duration> {
    interval_minutes(level).map(|m| Duration::minutes(i64::from(m)))
}

/// Compute the status that results from rating `current` at `now`
///
/// The input is left untouched; persisting the result is the caller's job.
pub fn next_review_state(
    current: &ReviewStatus,
    rating: Rating,
    now: Timestamp,
) -> Result<ReviewStatus, SchedulerError> {
    let level = next_level(current.level, rating)?;
    let minutes = interval_minutes(level).ok_or(SchedulerError::LevelOutOfRange(level))?;
    let next_review_at = i64::from(minutes)
        .checked_mul(MILLIS_PER_MINUTE)
        .and_then(|delay| now.checked_add(delay))
        .ok_or(SchedulerError::TimestampOverflow { now, minutes })?;

    let mut rating_history = Vec::with_capacity(current.rating_history.len() + 1);
    rating_history.extend_from_slice(&current.rating_history);
    rating_history.push(now);

    Ok(ReviewStatus {
        item_id: current.item_id.clone(),
        level,
        next_review_at,
        last_reviewed_at: now,
        rating_history,
    })
}

// ============================================================================
// SELECTION
// ============================================================================

/// Result of splitting statuses into review buckets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Learned items whose next review time has passed
    pub due: Vec<ReviewStatus>,
    /// Items never reviewed
    pub new: Vec<ReviewStatus>,
    /// Learned items scheduled in the future
    pub not_yet_due: usize,
}

impl Classification {
    /// Nothing to review right now
    pub fn is_empty(&self) -> bool {
        self.due.is_empty() && self.new.is_empty()
    }
}

/// Partition statuses into due and new buckets
///
/// Level-0 items go to `new`; learned items with `next_review_at <= now`
/// go to `due`; the rest are only counted. Input order is preserved.
pub fn classify_items<'a, I>(statuses: I, now: Timestamp) -> Classification
where
    I: IntoIterator<Item = &'a ReviewStatus>,
{
    let mut result = Classification::default();
    for status in statuses {
        if status.is_new() {
            result.new.push(status.clone());
        } else if status.next_review_at <= now {
            result.due.push(status.clone());
        } else {
            result.not_yet_due += 1;
        }
    }
    result
}

/// All due items followed by the first `max_new_per_session` new items
pub fn select_session_queue(
    due: Vec<ReviewStatus>,
    new: Vec<ReviewStatus>,
    max_new_per_session: usize,
) -> Vec<ReviewStatus> {
    let mut queue = due;
    queue.extend(new.into_iter().take(max_new_per_session));
    queue
}
