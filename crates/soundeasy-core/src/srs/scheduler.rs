//! Scheduler facade, ratings and configuration

use serde::{Deserialize, Serialize};

use super::algorithm::{
    classify_items, next_review_state, select_session_queue, Classification,
    DEFAULT_MAX_NEW_PER_SESSION,
};
use crate::review::{ReviewStatus, Timestamp};

/// Environment variable overriding [`SchedulerConfig::max_new_per_session`]
pub const MAX_NEW_ENV_VAR: &str = "SOUNDEASY_MAX_NEW_PER_SESSION";

// ============================================================================
// ERRORS
// ============================================================================

/// Contract violations detected by the scheduler
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// A status carried a level outside the interval table
    #[error("Level out of range: {0} (expected 0..=9)")]
    LevelOutOfRange(u8),
    /// A rating could not be parsed
    #[error("Invalid rating: {0}")]
    InvalidRating(String),
    /// The next review time does not fit in a timestamp
    #[error("Timestamp overflow: {now} + {minutes} minutes")]
    TimestampOverflow { now: Timestamp, minutes: u32 },
}

// ============================================================================
// RATING
// ============================================================================

/// Self-reported recall difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Forgot the item
    Again,
    /// Recalled with effort
    Hard,
    /// Recalled
    Good,
    /// Recalled instantly
    Easy,
}

impl Rating {
    /// All ratings, weakest first
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    /// Parse the conventional 1-4 button numbering
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Rating::Again),
            2 => Some(Rating::Hard),
            3 => Some(Rating::Good),
            4 => Some(Rating::Easy),
            _ => None,
        }
    }

    /// Button number (1-4)
    pub fn as_i32(&self) -> i32 {
        match self {
            Rating::Again => 1,
            Rating::Hard => 2,
            Rating::Good => 3,
            Rating::Easy => 4,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        }
    }

    /// Anything but `again` counts as a correct answer
    pub fn is_success(&self) -> bool {
        !matches!(self, Rating::Again)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Rating {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "again" => Ok(Rating::Again),
            "hard" => Ok(Rating::Hard),
            "good" => Ok(Rating::Good),
            "easy" => Ok(Rating::Easy),
            _ => Err(SchedulerError::InvalidRating(s.to_string())),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Tunables for session building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    /// Cap on never-reviewed items introduced per session
    pub max_new_per_session: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_new_per_session: DEFAULT_MAX_NEW_PER_SESSION,
        }
    }
}

impl SchedulerConfig {
    /// Defaults, overridden by `SOUNDEASY_MAX_NEW_PER_SESSION` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(MAX_NEW_ENV_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(value) => config.max_new_per_session = value,
                Err(e) => tracing::warn!(
                    "Ignoring {}={:?}: {}",
                    MAX_NEW_ENV_VAR,
                    raw,
                    e
                ),
            }
        }
        config
    }
}

// ============================================================================
// SCHEDULER
// ============================================================================

/// Outcome of every rating for one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResults {
    pub again: ReviewStatus,
    pub hard: ReviewStatus,
    pub good: ReviewStatus,
    pub easy: ReviewStatus,
}

impl PreviewResults {
    /// Preview for one rating
    pub fn get(&self, rating: Rating) -> &ReviewStatus {
        match rating {
            Rating::Again => &self.again,
            Rating::Hard => &self.hard,
            Rating::Good => &self.good,
            Rating::Easy => &self.easy,
        }
    }
}

/// Level-ladder scheduler
///
/// Holds configuration only; every method is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrsScheduler {
    config: SchedulerConfig,
}

impl SrsScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Split statuses into due and new buckets
    pub fn classify_items<'a, I>(&self, statuses: I, now: Timestamp) -> Classification
    where
        I: IntoIterator<Item = &'a ReviewStatus>,
    {
        classify_items(statuses, now)
    }

    /// Due items plus new items up to the configured cap
    pub fn select_session_queue(
        &self,
        due: Vec<ReviewStatus>,
        new: Vec<ReviewStatus>,
    ) -> Vec<ReviewStatus> {
        select_session_queue(due, new, self.config.max_new_per_session)
    }

    /// Classify then select in one step
    pub fn build_queue<'a, I>(&self, statuses: I, now: Timestamp) -> Vec<ReviewStatus>
    where
        I: IntoIterator<Item = &'a ReviewStatus>,
    {
        let Classification { due, new, .. } = self.classify_items(statuses, now);
        self.select_session_queue(due, new)
    }

    /// Apply a rating
    pub fn next_review_state(
        &self,
        current: &ReviewStatus,
        rating: Rating,
        now: Timestamp,
    ) -> Result<ReviewStatus, SchedulerError> {
        let next = next_review_state(current, rating, now)?;
        tracing::debug!(
            item = %current.item_id,
            %rating,
            from = current.level,
            to = next.level,
            next_review_at = next.next_review_at,
            "Review state advanced"
        );
        Ok(next)
    }

    /// What each rating would produce, without committing to any
    pub fn preview_reviews(
        &self,
        current: &ReviewStatus,
        now: Timestamp,
    ) -> Result<PreviewResults, SchedulerError> {
        Ok(PreviewResults {
            again: next_review_state(current, Rating::Again, now)?,
            hard: next_review_state(current, Rating::Hard, now)?,
            good: next_review_state(current, Rating::Good, now)?,
            easy: next_review_state(current, Rating::Easy, now)?,
        })
    }
}
