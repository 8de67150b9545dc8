//! # SoundEasy Core
//!
//! Spaced repetition engine for learning the sounds of English. Decides
//! which phonetic symbols a learner should see, and when, from self-reported
//! recall difficulty:
//!
//! - **Level ladder**: ten mastery levels, each mapped to a fixed review
//!   interval from one minute up to thirty days
//! - **Pure scheduling**: classification and transitions are deterministic
//!   functions of state, rating and the current time
//! - **Review store**: item id → status mapping persisted as one JSON
//!   document over any key/value text backend (SQLite by default)
//! - **Session driver**: headless flashcard flow with a uniform shuffle,
//!   re-queue on "again", session and lifetime statistics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soundeasy_core::prelude::*;
//!
//! // Durable storage (platform data directory)
//! let storage = SqliteTextStorage::new(None)?;
//!
//! let mut session = ReviewSession::new(
//!     PhoneticCatalog::english(),
//!     SilentAudio,
//!     storage,
//!     SchedulerConfig::from_env(),
//! );
//!
//! let now = now_millis();
//! if session.start(now)? > 0 {
//!     session.flip();
//!     let updated = session.rate(Rating::Good, now_millis())?;
//!     println!("{} is now at level {}", updated.item_id, updated.level);
//! }
//! ```
//!
//! The scheduler can also be used on its own:
//!
//! ```rust
//! use soundeasy_core::{next_review_state, Rating, ReviewStatus};
//!
//! let status = ReviewStatus::new("θ");
//! let next = next_review_state(&status, Rating::Good, 1_000).unwrap();
//! assert_eq!(next.level, 1);
//! assert_eq!(next.next_review_at, 61_000);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod catalog;
pub mod review;
pub mod session;
pub mod srs;
pub mod storage;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Review types
pub use review::{
    now_millis, HistoricalStats, ItemId, RatingTally, ReviewStatus, SessionStats, Streak,
    Timestamp,
};

// Scheduling
pub use srs::{
    classify_items,
    interval_for,
    interval_minutes,
    next_review_state,
    select_session_queue,
    Classification,
    PreviewResults,
    Rating,
    SchedulerConfig,
    SchedulerError,
    SrsScheduler,
    // Constants
    DEFAULT_MAX_NEW_PER_SESSION,
    INTERVAL_TABLE,
    MAX_LEVEL,
};

// Storage layer
pub use storage::{
    MemoryTextStorage, Result, ReviewStatusStore, SqliteTextStorage, StatusMap, StorageError,
    TextStorage, HISTORICAL_STATS_KEY, REVIEW_STATUS_KEY,
};

// Catalog
pub use catalog::{
    CatalogError, ItemCatalog, PhoneticCatalog, PhoneticCategory, PhoneticSymbol, SymbolKind,
};

// Session driver
pub use session::{AudioError, AudioPlayer, ReviewSession, SessionError, SilentAudio};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        now_millis, AudioPlayer, HistoricalStats, ItemCatalog, MemoryTextStorage,
        PhoneticCatalog, Rating, ReviewSession, ReviewStatus, ReviewStatusStore,
        SchedulerConfig, SessionError, SessionStats, SilentAudio, SqliteTextStorage,
        SrsScheduler, StorageError, TextStorage,
    };
}
