//! Single-mutex concurrency wrapper around [`Store`].
//!
//! Every public entry point locks the store for its entire critical
//! section. Reader methods copy their result into an owned `Vec` before the
//! guard is dropped, so callers always iterate a frozen image rather than a
//! live view — the same "lock, build an owned copy, return" shape used
//! elsewhere in this engine for table-map access.

use std::sync::{Mutex, MutexGuard};

use crate::config::StoreConfig;
use crate::error::OpResult;
use crate::mutator;
use crate::reader;
use crate::store::Store;
use crate::view::{Diff, Snapshot};

/// Thread-safe, transactional token state store.
#[derive(Debug)]
pub struct TokenStore<V> {
    inner: Mutex<Store<V>>,
}

impl<V> TokenStore<V> {
    /// Creates a store with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            inner: Mutex::new(Store::new(&config)),
        }
    }

    /// Locks the store, recovering from a poisoned mutex the same way a
    /// prior panic is recovered elsewhere in this engine: the store's maps
    /// stay structurally valid even if a critical section panicked
    /// mid-mutation, so there is nothing to propagate to the caller.
    fn lock(&self) -> MutexGuard<'_, Store<V>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a brand-new token at `hash` with `value`.
    pub fn seed(&self, hash: i64, value: V) -> OpResult
    where
        V: Clone,
    {
        mutator::seed(&mut self.lock(), hash, value)
    }

    /// Stages an insert, modify, or delete, dispatching on which of
    /// `old`/`new` are present.
    pub fn stage(&self, old: Option<i64>, new: Option<i64>, value: V) -> OpResult
    where
        V: Clone + PartialEq,
    {
        mutator::stage(&mut self.lock(), old, new, value)
    }

    /// Applies all staged changes atomically and prunes the value pool.
    pub fn commit(&self) {
        mutator::commit(&mut self.lock());
    }

    /// Discards all staged changes without touching committed state.
    pub fn discard(&self) {
        mutator::discard(&mut self.lock());
    }

    /// Returns the committed snapshot at `hash`, if any.
    pub fn try_get_snapshot(&self, hash: i64) -> Option<Snapshot<V>>
    where
        V: Clone + Default,
    {
        reader::try_get_snapshot(&self.lock(), hash)
    }

    /// The changes applied by the most recent `Commit`.
    pub fn get_committed_diff(&self) -> Vec<Diff<V>>
    where
        V: Clone + Default,
    {
        reader::get_committed_diff(&self.lock())
    }

    /// One diff per identity with a pending staged change.
    pub fn get_uncommitted_diff(&self) -> Vec<Diff<V>>
    where
        V: Clone + Default,
    {
        reader::get_uncommitted_diff(&self.lock())
    }

    /// Per-identity net change from `initial` to `current`.
    pub fn get_full_diff(&self) -> Vec<Diff<V>>
    where
        V: Clone + Default,
    {
        reader::get_full_diff(&self.lock())
    }

    /// One snapshot per identity reflecting the uncommitted image.
    pub fn get_full_current_snapshot(&self) -> Vec<Snapshot<V>>
    where
        V: Clone + Default,
    {
        reader::get_full_current_snapshot(&self.lock())
    }
}

impl<V> Default for TokenStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
