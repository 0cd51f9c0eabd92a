//! Scenario tests from the fixed scenario list, exercised through the
//! public string façade end to end.

use anyhow::Result;
use token_state_store::{OpResult, StringTokenStore};

fn v(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// Scenario 1: basic seed-modify-commit.
#[test]
fn basic_seed_modify_commit() -> Result<()> {
    let store = StringTokenStore::new();
    assert_eq!(store.seed("1", v("A")), OpResult::Success);
    assert_eq!(store.stage("1", "2", v("B")), OpResult::Success);
    store.commit();

    let snap = store.try_get_snapshot("2").ok_or_else(|| anyhow::anyhow!("missing snapshot"))?;
    assert_eq!(snap.initial_hash, Some("1".to_string()));
    assert_eq!(snap.previous_hash, Some("1".to_string()));
    assert_eq!(snap.current_hash, Some("2".to_string()));
    assert_eq!(snap.initial_value, v("A"));
    assert_eq!(snap.previous_value, v("A"));
    assert_eq!(snap.current_value, v("B"));
    assert!(store.try_get_snapshot("1").is_none());
    Ok(())
}

/// Scenario 2: three-step rename chain accumulates previous/initial correctly.
#[test]
fn three_step_chain() {
    let store = StringTokenStore::new();
    store.seed("1", v("A"));
    store.stage("1", "2", v("B"));
    store.commit();
    store.stage("2", "3", v("C"));
    store.commit();

    let snap = store.try_get_snapshot("3").unwrap();
    assert_eq!(snap.initial_hash, Some("1".to_string()));
    assert_eq!(snap.previous_hash, Some("2".to_string()));
    assert_eq!(snap.current_hash, Some("3".to_string()));
    assert_eq!(snap.initial_value, v("A"));
    assert_eq!(snap.previous_value, v("B"));
    assert_eq!(snap.current_value, v("C"));
}

/// Scenario 3: delete then reinsert at the same hash is a distinct identity.
#[test]
fn delete_then_reinsert_same_hash() {
    let store = StringTokenStore::new();
    store.seed("1", v("X"));
    assert_eq!(store.stage("1", "", None), OpResult::Success);
    store.commit();
    assert_eq!(store.stage("", "1", v("Y")), OpResult::Success);
    store.commit();

    let snaps = store.get_full_current_snapshot();
    assert_eq!(snaps.len(), 2);

    let deleted = snaps
        .iter()
        .find(|s| s.initial_hash == Some("1".to_string()) && s.current_hash.is_none())
        .expect("deleted token present");
    assert_eq!(deleted.current_value, None);

    let reinserted = snaps
        .iter()
        .find(|s| s.initial_hash.is_none() && s.current_hash == Some("1".to_string()))
        .expect("reinserted token present");
    assert_eq!(reinserted.current_value, v("Y"));
}

/// Scenario 4: modify colliding with an existing hash leaves committed state
/// untouched.
#[test]
fn modify_collides_with_existing_hash() {
    let store = StringTokenStore::new();
    store.seed("1", v("A"));
    store.seed("2", v("B"));

    assert_eq!(store.stage("1", "2", v("A*")), OpResult::Collision);

    let snap = store.try_get_snapshot("1").unwrap();
    assert_eq!(snap.current_hash, Some("1".to_string()));
    assert_eq!(snap.current_value, v("A"));
}

/// Scenario 5: discard rolls back a staged change.
#[test]
fn discard_rolls_back_staged_change() {
    let store = StringTokenStore::new();
    store.seed("1", v("A"));
    store.stage("1", "2", v("A*"));
    store.discard();

    assert_eq!(store.get_uncommitted_diff(), Vec::new());
    let snap = store.try_get_snapshot("1").unwrap();
    assert_eq!(snap.current_hash, Some("1".to_string()));
    assert_eq!(snap.current_value, v("A"));
}

/// Scenario 6: a mixed batch commit produces one committed diff per identity.
#[test]
fn mixed_batch_committed_diff() {
    let store = StringTokenStore::new();
    store.seed("1", v("A"));
    store.seed("2", v("B"));
    store.seed("3", v("C"));

    assert_eq!(store.stage("1", "11", v("A2")), OpResult::Success);
    assert_eq!(store.stage("2", "", None), OpResult::Success);
    assert_eq!(store.stage("", "12", v("D")), OpResult::Success);
    store.commit();

    let diffs = store.get_committed_diff();
    assert_eq!(diffs.len(), 3);

    let has = |left: Option<&str>, right: Option<&str>| {
        diffs.iter().any(|d| {
            d.left_hash.as_deref() == left && d.right_hash.as_deref() == right
        })
    };
    assert!(has(Some("1"), Some("11")));
    assert!(has(Some("2"), None));
    assert!(has(None, Some("12")));
}

/// Round-trip: a hash freed by a committed delete can be seeded again as a
/// brand-new identity.
#[test]
fn hash_freed_by_commit_can_be_reseeded() {
    let store = StringTokenStore::new();
    store.seed("1", v("A"));
    store.stage("1", "", None);
    store.commit();

    assert_eq!(store.seed("1", v("A2")), OpResult::Success);
}

/// Boundary: two concurrent-looking stages on the same identity in sequence —
/// the second always loses once the first has staged.
#[test]
fn second_stage_on_same_identity_before_commit_fails() {
    let store = StringTokenStore::new();
    store.seed("1", v("A"));
    assert_eq!(store.stage("1", "2", v("B")), OpResult::Success);
    assert_eq!(store.stage("1", "3", v("C")), OpResult::AlreadyStaged);
}
