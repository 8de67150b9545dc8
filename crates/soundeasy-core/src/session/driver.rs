//! Review Session
//!
//! Headless flashcard flow: build a queue from the store, present one card
//! at a time, apply ratings and write them back.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use super::audio::AudioPlayer;
use crate::catalog::{CatalogError, ItemCatalog};
use crate::review::{HistoricalStats, ReviewStatus, SessionStats, Streak, Timestamp};
use crate::srs::{Rating, SchedulerConfig, SchedulerError, SrsScheduler};
use crate::storage::{
    load_historical_stats, save_historical_stats, ReviewStatusStore, StorageError, TextStorage,
};

/// Session error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// `rate` was called with no card on screen
    #[error("No card is being reviewed")]
    NoCurrentCard,
    /// Catalog contract violated
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// Scheduler contract violated
    #[error("Scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),
    /// Progress could not be written; the in-memory session is still valid
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Session result type
pub type Result<T> = std::result::Result<T, SessionError>;

/// One review session over a catalog
///
/// Write failures do not stop the session: `start` and `rate` finish every
/// in-memory step first and then report the first failed write as
/// [`SessionError::Storage`], so the caller can warn that progress may not
/// survive a restart.
pub struct ReviewSession<C, A, S> {
    catalog: C,
    audio: A,
    store: ReviewStatusStore<S>,
    scheduler: SrsScheduler,
    current: Option<ReviewStatus>,
    queue: VecDeque<ReviewStatus>,
    flipped: bool,
    stats: SessionStats,
    streak: Streak,
    historical: HistoricalStats,
}

impl<C, A, S> ReviewSession<C, A, S>
where
    C: ItemCatalog,
    A: AudioPlayer,
    S: TextStorage,
{
    /// Load progress from `storage` and prepare an idle session
    pub fn new(catalog: C, audio: A, storage: S, config: SchedulerConfig) -> Self {
        let historical = load_historical_stats(&storage);
        let store = ReviewStatusStore::open(storage);
        Self {
            catalog,
            audio,
            store,
            scheduler: SrsScheduler::new(config),
            current: None,
            queue: VecDeque::new(),
            flipped: false,
            stats: SessionStats::default(),
            streak: Streak::default(),
            historical,
        }
    }

    /// Start a session with a thread-local RNG for queue order
    pub fn start(&mut self, now: Timestamp) -> Result<usize> {
        self.start_with_rng(now, &mut rand::thread_rng())
    }

    /// Start a session, shuffling the queue with `rng`
    ///
    /// Returns the number of cards queued, including the first one now on
    /// screen. Zero means there is nothing to review.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, now: Timestamp, rng: &mut R) -> Result<usize> {
        let known = self.catalog.known_item_ids();
        if known.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let started_at = DateTime::from_timestamp_millis(now).unwrap_or_else(Utc::now);
        self.historical.record_session_start(started_at);
        let mut deferred = save_historical_stats(self.store.storage(), &self.historical).err();

        if let Err(e) = self.store.ensure_initialized(&known) {
            deferred.get_or_insert(e);
        }

        let mut queue = self.scheduler.build_queue(self.store.statuses(), now);
        queue.shuffle(rng);

        self.queue = queue.into();
        self.stats = SessionStats::default();
        self.streak = Streak::default();
        self.flipped = false;
        self.current = self.queue.pop_front();

        let queued = self.queue.len() + usize::from(self.current.is_some());
        tracing::info!(
            queued,
            tracked = self.store.len(),
            practice_count = self.historical.practice_count,
            "Review session started"
        );

        self.play_current();
        match deferred {
            Some(e) => Err(e.into()),
            None => Ok(queued),
        }
    }

    /// Rate the card on screen and move to the next one
    ///
    /// Returns the card's new status. A card rated `again` goes to the back
    /// of the queue and will be shown again this session.
    pub fn rate(&mut self, rating: Rating, now: Timestamp) -> Result<ReviewStatus> {
        let card = self.current.as_ref().ok_or(SessionError::NoCurrentCard)?;
        // The store holds the latest state if this card was already rated
        let previous = self.store.get(&card.item_id).unwrap_or(card);
        let updated = self.scheduler.next_review_state(previous, rating, now)?;
        let previous_level = previous.level;

        self.current = None;
        let mut deferred = self.store.put(updated.clone()).err();

        self.stats.record(previous_level, rating);
        self.streak.record(rating);
        self.historical.record_rating(rating, self.streak.best);
        if let Err(e) = save_historical_stats(self.store.storage(), &self.historical) {
            deferred.get_or_insert(e);
        }

        if rating == Rating::Again {
            self.queue.push_back(updated.clone());
        }

        self.flipped = false;
        self.current = self.queue.pop_front();
        if self.current.is_none() {
            tracing::info!(
                reviewed = self.stats.reviewed,
                new_learned = self.stats.new_learned,
                "Review session complete"
            );
        }
        self.play_current();

        match deferred {
            Some(e) => Err(e.into()),
            None => Ok(updated),
        }
    }

    /// Reveal the answer side of the current card
    pub fn flip(&mut self) {
        if self.current.is_some() {
            self.flipped = true;
        }
    }

    /// Play the current card's recording again
    pub fn replay_audio(&mut self) {
        self.play_current();
    }

    /// Abandon the session; ratings already applied stay committed
    pub fn stop(&mut self) {
        self.current = None;
        self.queue.clear();
        self.flipped = false;
    }

    /// Card on screen
    pub fn current(&self) -> Option<&ReviewStatus> {
        self.current.as_ref()
    }

    /// Cards waiting behind the current one
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Upcoming cards in presentation order
    pub fn upcoming(&self) -> impl Iterator<Item = &ReviewStatus> {
        self.queue.iter()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// No card on screen and nothing queued
    pub fn is_complete(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn streak(&self) -> &Streak {
        &self.streak
    }

    pub fn historical(&self) -> &HistoricalStats {
        &self.historical
    }

    pub fn store(&self) -> &ReviewStatusStore<S> {
        &self.store
    }

    pub fn scheduler(&self) -> &SrsScheduler {
        &self.scheduler
    }

    /// Zero the lifetime stats
    pub fn reset_historical_stats(&mut self) -> Result<()> {
        self.historical = HistoricalStats::default();
        save_historical_stats(self.store.storage(), &self.historical)?;
        Ok(())
    }

    /// Forget all review progress and end the session
    pub fn reset_progress(&mut self) -> Result<()> {
        self.stop();
        self.store.reset()?;
        Ok(())
    }

    fn play_current(&mut self) {
        let Some(card) = &self.current else {
            return;
        };
        let Some(audio_file) = self.catalog.audio_file(&card.item_id) else {
            return;
        };
        if let Err(e) = self.audio.play(&card.item_id, audio_file) {
            tracing::warn!("{}", e);
        }
    }
}
