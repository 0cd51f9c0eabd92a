//! Raw container backing the token store: identity/hash/value maps and the
//! staging and committed-change logs. Pure container semantics — no
//! invariant enforcement lives here; that's [`crate::mutator`]'s job.

use std::collections::{HashMap, HashSet};

use crate::config::StoreConfig;
use crate::token::{ChangeRecord, StagedTarget, TokenId, TokenIdAllocator, TokenState};

/// Backing storage for one token store instance.
#[derive(Debug)]
pub struct Store<V> {
    allocator: TokenIdAllocator,
    states: HashMap<TokenId, TokenState>,
    hash_index: HashMap<i64, TokenId>,
    pool: HashMap<i64, V>,
    sanctuary: HashMap<TokenId, V>,
    staging: HashMap<TokenId, StagedTarget>,
    committed_log: Vec<ChangeRecord>,
}

impl<V> Store<V> {
    /// Creates an empty store, pre-sizing the backing maps per `config`.
    pub fn new(config: &StoreConfig) -> Self {
        let cap = config.initial_capacity;
        Self {
            allocator: TokenIdAllocator::new(),
            states: HashMap::with_capacity(cap),
            hash_index: HashMap::with_capacity(cap),
            pool: HashMap::with_capacity(cap),
            sanctuary: HashMap::with_capacity(cap),
            staging: HashMap::new(),
            committed_log: Vec::new(),
        }
    }

    /// Allocates a fresh identity, never before issued by this store.
    pub fn allocate_identity(&mut self) -> TokenId {
        self.allocator.allocate()
    }

    // -- token state -----------------------------------------------------

    pub fn state(&self, id: TokenId) -> Option<TokenState> {
        self.states.get(&id).copied()
    }

    pub fn set_state(&mut self, id: TokenId, state: TokenState) {
        self.states.insert(id, state);
    }

    pub fn all_states(&self) -> impl Iterator<Item = (TokenId, TokenState)> + '_ {
        self.states.iter().map(|(&id, &state)| (id, state))
    }

    // -- hash -> identity index -------------------------------------------

    pub fn identity_for_hash(&self, hash: i64) -> Option<TokenId> {
        self.hash_index.get(&hash).copied()
    }

    pub fn set_hash_identity(&mut self, hash: i64, id: TokenId) {
        self.hash_index.insert(hash, id);
    }

    pub fn remove_hash_identity(&mut self, hash: i64) -> Option<TokenId> {
        self.hash_index.remove(&hash)
    }

    // -- value pool --------------------------------------------------------

    pub fn pool_value(&self, hash: i64) -> Option<&V> {
        self.pool.get(&hash)
    }

    pub fn set_pool_value(&mut self, hash: i64, value: V) {
        self.pool.insert(hash, value);
    }

    /// Removes every pool entry whose hash is not in `live`.
    pub fn prune(&mut self, live: &HashSet<i64>) -> usize {
        let before = self.pool.len();
        self.pool.retain(|hash, _| live.contains(hash));
        before - self.pool.len()
    }

    // -- initial-value sanctuary ------------------------------------------

    pub fn sanctuary_value(&self, id: TokenId) -> Option<&V> {
        self.sanctuary.get(&id)
    }

    pub fn set_sanctuary_value(&mut self, id: TokenId, value: V) {
        self.sanctuary.insert(id, value);
    }

    // -- staging -----------------------------------------------------------

    pub fn stage(&mut self, id: TokenId, target: StagedTarget) {
        self.staging.insert(id, target);
    }

    pub fn clear_staging(&mut self) {
        self.staging.clear();
    }

    pub fn is_staged(&self, id: TokenId) -> bool {
        self.staging.contains_key(&id)
    }

    pub fn staged_target(&self, id: TokenId) -> Option<StagedTarget> {
        self.staging.get(&id).copied()
    }

    pub fn all_staged(&self) -> impl Iterator<Item = (TokenId, StagedTarget)> + '_ {
        self.staging.iter().map(|(&id, &target)| (id, target))
    }

    // -- committed-change log ----------------------------------------------

    pub fn append_change(&mut self, record: ChangeRecord) {
        self.committed_log.push(record);
    }

    pub fn clear_log(&mut self) {
        self.committed_log.clear();
    }

    pub fn log(&self) -> &[ChangeRecord] {
        &self.committed_log
    }
}
