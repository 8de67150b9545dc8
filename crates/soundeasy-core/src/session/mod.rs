//! Session module - drives a flashcard review session
//!
//! Composes the catalog, the scheduler and the review store:
//! - Builds a uniformly shuffled queue of due and new items
//! - Applies ratings and writes results back immediately
//! - Tracks session stats, streaks and lifetime practice stats
//!
//! Timing and animation are left to the UI.

mod audio;
mod driver;

pub use audio::{AudioError, AudioPlayer, SilentAudio};
pub use driver::{Result, ReviewSession, SessionError};
