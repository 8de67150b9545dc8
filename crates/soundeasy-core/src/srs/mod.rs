//! SRS (Spaced Repetition Scheduler) Module
//!
//! A ten-step level ladder: each correct answer moves an item up the ladder
//! and each step maps to a fixed review interval.
//!
//! ## Transitions:
//! - again: back to level 1
//! - hard: level * 0.8, floored, at least 1
//! - good: +1, capped at 9
//! - easy: +2, capped at 9
//!
//! ## Intervals (minutes):
//! `[0, 1, 10, 720, 1440, 2880, 5760, 10080, 21600, 43200]`

mod algorithm;
mod scheduler;

pub use algorithm::{
    // Core functions
    classify_items,
    interval_for,
    interval_minutes,
    next_level,
    next_review_state,
    select_session_queue,
    Classification,
    // Constants
    DEFAULT_MAX_NEW_PER_SESSION,
    INTERVAL_TABLE,
    MAX_LEVEL,
    MILLIS_PER_MINUTE,
};

pub use scheduler::{
    PreviewResults, Rating, SchedulerConfig, SchedulerError, SrsScheduler, MAX_NEW_ENV_VAR,
};
