//! Derives point snapshots and the three diff sequences from [`Store`] state.
//! Read-only: nothing here mutates the store.

use crate::store::Store;
use crate::view::{Diff, Snapshot};

fn pool_or_default<V: Clone + Default>(store: &Store<V>, hash: Option<i64>) -> V {
    hash.and_then(|h| store.pool_value(h).cloned()).unwrap_or_default()
}

fn sanctuary_or_default<V: Clone + Default>(store: &Store<V>, id: crate::token::TokenId) -> V {
    store.sanctuary_value(id).cloned().unwrap_or_default()
}

/// Returns the committed snapshot for `hash`, or `None` if the hash is
/// unmapped, staged for deletion, or already committed-deleted.
///
/// Ignores staged modifications other than a pending delete: a token
/// staged for modify or insert still reports its committed image here.
pub fn try_get_snapshot<V: Clone + Default>(store: &Store<V>, hash: i64) -> Option<Snapshot<V>> {
    let id = store.identity_for_hash(hash)?;
    if let Some(target) = store.staged_target(id) {
        if target.is_none() {
            return None;
        }
    }
    let state = store.state(id)?;
    state.current?;

    Some(Snapshot {
        initial_hash: state.initial,
        previous_hash: state.previous,
        current_hash: state.current,
        initial_value: sanctuary_or_default(store, id),
        previous_value: pool_or_default(store, state.previous),
        current_value: pool_or_default(store, state.current),
    })
}

/// The changes applied by the most recent `Commit`.
pub fn get_committed_diff<V: Clone + Default>(store: &Store<V>) -> Vec<Diff<V>> {
    let mut out = Vec::new();
    for record in store.log() {
        if record.left == record.right {
            continue;
        }

        let left_value = match store.state(record.identity) {
            Some(state) if record.left == state.initial => {
                sanctuary_or_default(store, record.identity)
            }
            _ => pool_or_default(store, record.left),
        };
        let right_value = pool_or_default(store, record.right);

        out.push(Diff {
            left_hash: record.left,
            right_hash: record.right,
            left_value,
            right_value,
        });
    }
    out
}

/// One diff per identity whose staged target differs from its committed
/// `current`.
pub fn get_uncommitted_diff<V: Clone + Default>(store: &Store<V>) -> Vec<Diff<V>> {
    let mut out = Vec::new();
    for (id, target) in store.all_staged() {
        let Some(state) = store.state(id) else {
            continue;
        };
        if target == state.current {
            continue;
        }

        let current_value = if state.current == state.initial {
            sanctuary_or_default(store, id)
        } else {
            pool_or_default(store, state.current)
        };
        let staged_value = pool_or_default(store, target);

        out.push(Diff {
            left_hash: state.current,
            right_hash: target,
            left_value: current_value,
            right_value: staged_value,
        });
    }
    out
}

/// Per-identity net change from `initial` to `current`, ignoring
/// intermediate commits.
///
/// Deleted committed tokens (`initial` Some, `current` None) contribute a
/// `(initial -> None)` diff; purely inserted-then-deleted tokens (`initial`
/// None, `current` None) contribute nothing.
pub fn get_full_diff<V: Clone + Default>(store: &Store<V>) -> Vec<Diff<V>> {
    let mut out = Vec::new();
    for (id, state) in store.all_states() {
        match state.initial {
            Some(_) if state.initial != state.current => {
                out.push(Diff {
                    left_hash: state.initial,
                    right_hash: state.current,
                    left_value: sanctuary_or_default(store, id),
                    right_value: pool_or_default(store, state.current),
                });
            }
            None if state.current.is_some() => {
                out.push(Diff {
                    left_hash: None,
                    right_hash: state.current,
                    left_value: V::default(),
                    right_value: pool_or_default(store, state.current),
                });
            }
            _ => {}
        }
    }
    out
}

/// One snapshot per identity, reflecting the *uncommitted* image: a staged
/// identity reports its staged target as `current` and its committed
/// `current` as `previous` (staging has "moved" the previous snapshot one
/// step). An unstaged identity reports its committed triple as-is.
pub fn get_full_current_snapshot<V: Clone + Default>(store: &Store<V>) -> Vec<Snapshot<V>> {
    let mut out = Vec::new();
    for (id, state) in store.all_states() {
        let (current_hash, previous_hash) = match store.staged_target(id) {
            Some(target) => (target, state.current),
            None => (state.current, state.previous),
        };

        out.push(Snapshot {
            initial_hash: state.initial,
            previous_hash,
            current_hash,
            initial_value: sanctuary_or_default(store, id),
            previous_value: pool_or_default(store, previous_hash),
            current_value: pool_or_default(store, current_hash),
        });
    }
    out
}
