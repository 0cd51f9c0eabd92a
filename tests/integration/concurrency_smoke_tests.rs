//! Concurrency smoke tests: many threads driving the same store through the
//! string façade, verifying the single-mutex wrapper's atomicity guarantees
//! hold under real contention.

use ntest::timeout;
use std::sync::Arc;
use std::thread;
use token_state_store::{OpResult, StringTokenStore};

#[timeout(10000)]
#[test]
fn concurrent_seeds_on_distinct_hashes_never_collide() {
    let store = Arc::new(StringTokenStore::new());
    let writers = 8;
    let per_writer = 200;

    let handles: Vec<_> = (0..writers)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..per_writer {
                    let hash = (w * per_writer + i).to_string();
                    let result = store.seed(&hash, Some(format!("v{w}-{i}")));
                    assert_eq!(result, OpResult::Success);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(
        store.get_full_current_snapshot().len(),
        (writers * per_writer) as usize
    );
}

#[timeout(10000)]
#[test]
fn concurrent_stage_on_same_identity_yields_exactly_one_winner() {
    let store = Arc::new(StringTokenStore::new());
    store.seed("1", Some("A".to_string()));

    let contenders = 16;
    let handles: Vec<_> = (0..contenders)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.stage("1", &(100 + i).to_string(), Some(format!("v{i}"))))
        })
        .collect();

    let results: Vec<OpResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| **r == OpResult::Success).count(), 1);
    assert_eq!(
        results.iter().filter(|r| **r == OpResult::AlreadyStaged).count(),
        (contenders - 1) as usize
    );

    store.commit();
    assert_eq!(store.get_uncommitted_diff(), Vec::new());
}

#[timeout(10000)]
#[test]
fn readers_never_observe_a_torn_commit() {
    let store = Arc::new(StringTokenStore::new());
    for i in 0..100 {
        store.seed(&i.to_string(), Some(format!("v{i}")));
    }

    let writer_store = Arc::clone(&store);
    let writer = thread::spawn(move || {
        for round in 0..50 {
            for i in 0..100 {
                let old = if round == 0 {
                    i.to_string()
                } else {
                    format!("{i}-{}", round - 1)
                };
                let new = format!("{i}-{round}");
                writer_store.stage(&old, &new, Some(format!("v{i}-{round}")));
            }
            writer_store.commit();
        }
    });

    let reader_store = Arc::clone(&store);
    let reader = thread::spawn(move || {
        for _ in 0..200 {
            // Every snapshot returned while a commit is mid-flight is still
            // internally consistent: current and previous values match the
            // triple stored at some linearization point, never a mix.
            let snaps = reader_store.get_full_current_snapshot();
            assert_eq!(snaps.len(), 100);
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();
}
