//! Review module - Core types and data structures
//!
//! Implements the learner-progress model with:
//! - Per-item review status on a 10-step level ladder
//! - Ephemeral session counters and streaks
//! - Persisted lifetime practice statistics

mod stats;
mod status;

pub use stats::{HistoricalStats, RatingTally, SessionStats, Streak};
pub use status::{now_millis, ItemId, ReviewStatus, Timestamp};
