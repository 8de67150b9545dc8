//! Journey: a new learner's first session
//!
//! Open the default catalog on empty storage, work through the queue,
//! close everything and check what survived on disk.

use rand::rngs::StdRng;
use rand::SeedableRng;
use soundeasy_core::storage::load_historical_stats;
use soundeasy_core::{
    ItemCatalog, PhoneticCatalog, Rating, ReviewSession, ReviewStatusStore, SchedulerConfig,
    SessionError, SilentAudio, SqliteTextStorage,
};
use soundeasy_e2e_tests::mocks::{MockAudio, TestDataFactory, MINUTE};
use tempfile::tempdir;

const T0: i64 = 1_700_000_000_000;

#[test]
fn test_first_session_learns_ten_new_symbols() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("learner.db");

    {
        let storage = SqliteTextStorage::new(Some(db_path.clone())).unwrap();
        let mut session = ReviewSession::new(
            PhoneticCatalog::english(),
            SilentAudio,
            storage,
            SchedulerConfig::default(),
        );

        let queued = session
            .start_with_rng(T0, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(queued, 10);

        let mut seen = Vec::new();
        while let Some(card) = session.current() {
            assert!(card.is_new());
            seen.push(card.item_id.clone());
            session.flip();
            session.rate(Rating::Good, T0).unwrap();
        }

        assert!(session.is_complete());
        assert_eq!(seen.len(), 10);
        assert_eq!(session.stats().new_learned, 10);
        assert_eq!(session.stats().reviewed, 0);
        assert_eq!(session.stats().ratings.good, 10);
        assert_eq!(session.streak().best, 10);
    }

    let store = ReviewStatusStore::open(SqliteTextStorage::new(Some(db_path.clone())).unwrap());
    assert_eq!(store.len(), 48);
    let learned: Vec<_> = store.statuses().filter(|s| !s.is_new()).collect();
    assert_eq!(learned.len(), 10);
    for status in learned {
        assert_eq!(status.level, 1);
        assert_eq!(status.next_review_at, T0 + MINUTE);
        assert_eq!(status.rating_history, vec![T0]);
    }

    let historical = load_historical_stats(store.storage());
    assert_eq!(historical.practice_count, 1);
    assert_eq!(historical.total_questions, 10);
    assert_eq!(historical.total_correct, 10);
    assert_eq!(historical.all_time_best_streak, 10);
}

#[test]
fn test_forgotten_card_comes_back_in_the_same_session() {
    let dir = tempdir().unwrap();
    let storage = SqliteTextStorage::new(Some(dir.path().join("learner.db"))).unwrap();
    let mut session = ReviewSession::new(
        TestDataFactory::catalog(&["p", "b", "t"]),
        SilentAudio,
        storage,
        SchedulerConfig::default(),
    );
    session
        .start_with_rng(T0, &mut StdRng::seed_from_u64(2))
        .unwrap();

    let forgotten = session.current().unwrap().item_id.clone();
    session.rate(Rating::Again, T0).unwrap();

    let mut ratings = 1;
    let mut shown_again = false;
    while let Some(card) = session.current() {
        if card.item_id == forgotten {
            shown_again = true;
        }
        session.rate(Rating::Good, T0 + MINUTE).unwrap();
        ratings += 1;
    }

    assert!(shown_again);
    assert_eq!(ratings, 4);
    assert_eq!(session.stats().new_learned, 3);
    assert_eq!(session.stats().reviewed, 1);
    assert_eq!(session.historical().total_questions, 4);
    assert_eq!(session.historical().total_correct, 3);

    let status = session.store().get(&forgotten).unwrap();
    assert_eq!(status.level, 2);
    assert_eq!(status.rating_history, vec![T0, T0 + MINUTE]);
}

#[test]
fn test_audio_requests_follow_the_cards() {
    let catalog = TestDataFactory::catalog(&["m", "n"]);
    let mut audio = MockAudio::failing();
    let shown = {
        let mut session = ReviewSession::new(
            &catalog,
            &mut audio,
            soundeasy_core::MemoryTextStorage::new(),
            SchedulerConfig::default(),
        );
        session
            .start_with_rng(T0, &mut StdRng::seed_from_u64(3))
            .unwrap();

        let mut shown = Vec::new();
        while let Some(card) = session.current() {
            shown.push(card.item_id.clone());
            session.rate(Rating::Easy, T0).unwrap();
        }
        shown
    };

    assert_eq!(audio.played_ids(), shown.iter().map(String::as_str).collect::<Vec<_>>());
    for (id, file) in &audio.played {
        assert_eq!(Some(file.as_str()), catalog.audio_file(id));
    }
}

#[test]
fn test_rating_after_session_end_is_rejected() {
    let mut session = ReviewSession::new(
        TestDataFactory::catalog(&["k"]),
        SilentAudio,
        soundeasy_core::MemoryTextStorage::new(),
        SchedulerConfig::default(),
    );
    session
        .start_with_rng(T0, &mut StdRng::seed_from_u64(4))
        .unwrap();
    session.rate(Rating::Good, T0).unwrap();

    assert!(matches!(
        session.rate(Rating::Good, T0),
        Err(SessionError::NoCurrentCard)
    ));
    assert_eq!(session.store().get("k").unwrap().review_count(), 1);
}
