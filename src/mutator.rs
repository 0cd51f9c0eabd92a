//! Seed, Stage, Commit, Discard and Prune: the state machine over tokens.
//!
//! Free functions over `&mut Store<V>` rather than methods on `Store` itself,
//! so invariant enforcement stays separate from the pure container in
//! [`crate::store`].

use std::collections::HashSet;

use crate::error::OpResult;
use crate::store::Store;
use crate::token::{ChangeRecord, TokenState};

/// Registers a brand-new token at `hash` with `value`, setting
/// `(initial, previous, current)` all to `hash`.
///
/// Fails with [`OpResult::DuplicateHash`] if `hash` is already mapped.
pub fn seed<V: Clone>(store: &mut Store<V>, hash: i64, value: V) -> OpResult {
    if store.identity_for_hash(hash).is_some() {
        return OpResult::DuplicateHash;
    }
    let id = store.allocate_identity();
    store.set_hash_identity(hash, id);
    store.set_pool_value(hash, value.clone());
    store.set_sanctuary_value(id, value);
    store.set_state(id, TokenState::seeded(hash));
    tracing::trace!(hash, "seed");
    OpResult::Success
}

/// Dispatches a staged change based on which of `old`/`new` are present:
/// delete (`old` only), insert (`new` only), or modify (both).
pub fn stage<V: Clone + PartialEq>(
    store: &mut Store<V>,
    old: Option<i64>,
    new: Option<i64>,
    value: V,
) -> OpResult {
    match (old, new) {
        (None, None) => OpResult::InvalidInput,
        (Some(old), None) => stage_delete(store, old),
        (None, Some(new)) => stage_insert(store, new, value),
        (Some(old), Some(new)) => stage_modify(store, old, new, value),
    }
}

fn stage_delete<V>(store: &mut Store<V>, old: i64) -> OpResult {
    let Some(id) = store.identity_for_hash(old) else {
        return OpResult::UnknownHash;
    };
    if store.is_staged(id) {
        return OpResult::AlreadyStaged;
    }
    store.stage(id, None);
    tracing::trace!(old, "stage delete");
    OpResult::Success
}

fn stage_insert<V: Clone>(store: &mut Store<V>, new: i64, value: V) -> OpResult {
    if store.identity_for_hash(new).is_some() {
        return OpResult::DuplicateHash;
    }
    let id = store.allocate_identity();
    store.set_hash_identity(new, id);
    store.set_pool_value(new, value.clone());
    store.set_sanctuary_value(id, value);
    store.set_state(id, TokenState::inserted());
    store.stage(id, Some(new));
    tracing::trace!(new, "stage insert");
    OpResult::Success
}

fn stage_modify<V: Clone + PartialEq>(
    store: &mut Store<V>,
    old: i64,
    new: i64,
    value: V,
) -> OpResult {
    let Some(id) = store.identity_for_hash(old) else {
        return OpResult::UnknownHash;
    };
    if let Some(other) = store.identity_for_hash(new) {
        if other != id {
            return OpResult::Collision;
        }
    }
    if store.is_staged(id) {
        return OpResult::AlreadyStaged;
    }
    if let Some(existing) = store.pool_value(new) {
        if *existing != value {
            return OpResult::Collision;
        }
    }
    store.set_hash_identity(new, id);
    store.set_pool_value(new, value);
    store.stage(id, Some(new));
    tracing::trace!(old, new, "stage modify");
    OpResult::Success
}

/// Applies every staged change atomically, advances `previous`/`current`,
/// refills the committed-change log, clears staging, then prunes the pool.
pub fn commit<V>(store: &mut Store<V>) {
    store.clear_log();

    let staged: Vec<_> = store.all_staged().collect();
    for (id, target) in &staged {
        let Some(state) = store.state(*id) else {
            // Cannot happen under the store's invariants: every staged
            // identity was registered by a prior Seed or Stage.
            continue;
        };

        store.append_change(ChangeRecord {
            identity: *id,
            left: state.current,
            right: *target,
        });

        if let Some(old_hash) = state.current {
            if state.current != *target {
                store.remove_hash_identity(old_hash);
            }
        }

        store.set_state(
            *id,
            TokenState {
                initial: state.initial,
                previous: state.current,
                current: *target,
            },
        );

        if let Some(new_hash) = *target {
            store.set_hash_identity(new_hash, *id);
        }
    }

    tracing::debug!(staged = staged.len(), "commit applied");
    store.clear_staging();
    prune(store);
}

/// Discards all staged changes without touching committed state.
pub fn discard<V>(store: &mut Store<V>) {
    let staged = store.all_staged().count();
    tracing::debug!(staged, "discard dropped staged changes");
    store.clear_staging();
    prune(store);
}

/// Removes every pool entry for a hash no longer referenced by any token's
/// `(initial, previous, current)` or by any staged target.
fn prune<V>(store: &mut Store<V>) {
    let mut live: HashSet<i64> = HashSet::new();
    for (_, state) in store.all_states() {
        live.extend([state.initial, state.previous, state.current].into_iter().flatten());
    }
    for (_, target) in store.all_staged() {
        live.extend(target);
    }
    let removed = store.prune(&live);
    tracing::trace!(removed, "pool pruned");
}
