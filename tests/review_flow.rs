//! End-to-end review flow: miss a word, see it come back, persist across restarts

use std::time::Duration;
use wordquest_engine::core::Word;
use wordquest_engine::review::{ReviewConfig, ReviewScheduler, RoundOutcome};
use wordquest_engine::round::{Round, RoundStatus, ShuffleBag, TargetSource, choose_target};
use wordquest_engine::storage::FileStore;
use wordquest_engine::wordlists::words_from_slice;

use rand::SeedableRng;
use rand::rngs::StdRng;

fn fixed_clock() -> u64 {
    1_700_000_000_000
}

#[test]
fn missed_word_returns_on_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let pool = words_from_slice(&["plant", "crane", "slate", "alloy", "loyal"]);
    let plant = Word::new("plant").unwrap();

    // Lose PLANT in the first round
    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut scheduler =
            ReviewScheduler::load(store, ReviewConfig::default()).with_clock(fixed_clock);

        let mut round = Round::new(plant.clone());
        for guess in ["crane", "slate", "alloy", "loyal", "crane", "slate"] {
            round.submit_word(guess).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Lost);

        let outcome = round.outcome(Duration::from_secs(45));
        assert_eq!(outcome, RoundOutcome::lost(6, Duration::from_secs(45)));

        let scheduled = scheduler.schedule_review(&plant, &outcome);
        let dues: Vec<u64> = scheduled.iter().map(|i| i.due_round).collect();
        assert_eq!(dues, vec![1, 3, 7]);
        assert_eq!(scheduler.round(), 1);
    }

    // A fresh process sees the persisted queue and serves PLANT first
    let store = FileStore::open(dir.path()).unwrap();
    let mut scheduler = ReviewScheduler::load(store, ReviewConfig::default());
    assert_eq!(scheduler.round(), 1);
    assert_eq!(scheduler.count_due(&pool), 1);

    let mut bag = ShuffleBag::new(FileStore::open(dir.path()).unwrap());
    let mut rng = StdRng::seed_from_u64(3);

    let (target, source) = choose_target(&mut scheduler, &mut bag, &pool, "all", &mut rng).unwrap();
    assert_eq!(target, plant);
    assert!(matches!(source, TargetSource::Review(ref item) if item.reason == "lost"));

    // Win the review quickly; nothing new is scheduled
    let mut round = Round::new(target);
    round.submit_word("plant").unwrap();
    let outcome = round.outcome(Duration::from_secs(10));
    assert!(scheduler.schedule_review(&plant, &outcome).is_empty());
    assert_eq!(scheduler.round(), 2);

    // Rounds 3 and 7 bring it back again
    let mut served_at = Vec::new();
    for _ in 0..6 {
        if let Some(item) = scheduler.peek_due(&pool) {
            served_at.push(scheduler.round());
            scheduler.consume(&item);
        }
        let other = Word::new("crane").unwrap();
        scheduler.schedule_review(&other, &RoundOutcome::won(2, 6, Duration::from_secs(5)));
    }
    assert_eq!(served_at, vec![3, 7]);
    assert!(scheduler.items().is_empty());
}

#[test]
fn corrupt_queue_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("wq_v2_review_queue.json"), "not json").unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let mut scheduler = ReviewScheduler::load(store, ReviewConfig::default());
    assert_eq!(scheduler.round(), 0);

    let plant = Word::new("plant").unwrap();
    scheduler.schedule_review(&plant, &RoundOutcome::lost(6, Duration::from_secs(1)));

    let reloaded = ReviewScheduler::load(FileStore::open(dir.path()).unwrap(), ReviewConfig::default());
    assert_eq!(reloaded.items().len(), 3);
}
