//! String-hash façade: the default instantiation of the core with value
//! type `Option<String>` (a nullable string) and string-encoded hashes.
//!
//! This is the only layer that ever sees a hash as text; everything below
//! it — [`crate::store`], [`crate::mutator`], [`crate::reader`] — operates
//! exclusively on `Option<i64>`.

use crate::concurrency::TokenStore;
use crate::config::StoreConfig;
use crate::error::OpResult;
use crate::view::{Diff, Snapshot};

/// Parses a hash string using strict base-10 `i64` parsing. Empty or
/// unparseable input becomes "absent hash" (`None`), never an error.
pub fn parse_hash(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<i64>().ok()
}

/// Formats an optional hash via standard decimal formatting, rendering
/// `None` as the empty string.
pub fn format_hash(hash: Option<i64>) -> String {
    match hash {
        Some(h) => h.to_string(),
        None => String::new(),
    }
}

/// String-hash counterpart of [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSnapshot {
    pub initial_hash: Option<String>,
    pub previous_hash: Option<String>,
    pub current_hash: Option<String>,
    pub initial_value: Option<String>,
    pub previous_value: Option<String>,
    pub current_value: Option<String>,
}

impl From<Snapshot<Option<String>>> for StringSnapshot {
    fn from(s: Snapshot<Option<String>>) -> Self {
        Self {
            initial_hash: s.initial_hash.map(|h| h.to_string()),
            previous_hash: s.previous_hash.map(|h| h.to_string()),
            current_hash: s.current_hash.map(|h| h.to_string()),
            initial_value: s.initial_value,
            previous_value: s.previous_value,
            current_value: s.current_value,
        }
    }
}

/// String-hash counterpart of [`Diff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringDiff {
    pub left_hash: Option<String>,
    pub right_hash: Option<String>,
    pub left_value: Option<String>,
    pub right_value: Option<String>,
}

impl From<Diff<Option<String>>> for StringDiff {
    fn from(d: Diff<Option<String>>) -> Self {
        Self {
            left_hash: d.left_hash.map(|h| h.to_string()),
            right_hash: d.right_hash.map(|h| h.to_string()),
            left_value: d.left_value,
            right_value: d.right_value,
        }
    }
}

/// Token store specialized to string hashes and nullable-string values —
/// the default configuration callers embed.
#[derive(Debug)]
pub struct StringTokenStore {
    inner: TokenStore<Option<String>>,
}

impl StringTokenStore {
    pub fn new() -> Self {
        Self {
            inner: TokenStore::new(),
        }
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            inner: TokenStore::with_config(config),
        }
    }

    /// Seeds a token at `hash_string`. `hash_string` is required; an empty
    /// or unparseable string yields [`OpResult::InvalidInput`].
    pub fn seed(&self, hash_string: &str, value: Option<String>) -> OpResult {
        match parse_hash(hash_string) {
            Some(hash) => self.inner.seed(hash, value),
            None => OpResult::InvalidInput,
        }
    }

    /// Stages an insert, modify, or delete. Both hash strings are parsed
    /// independently; an empty or unparseable string becomes an absent
    /// hash, so `stage("", "", _)` reaches the core as `(None, None)` and
    /// yields `InvalidInput`.
    pub fn stage(&self, old_hash_string: &str, new_hash_string: &str, value: Option<String>) -> OpResult {
        self.inner
            .stage(parse_hash(old_hash_string), parse_hash(new_hash_string), value)
    }

    pub fn commit(&self) {
        self.inner.commit();
    }

    pub fn discard(&self) {
        self.inner.discard();
    }

    pub fn try_get_snapshot(&self, hash_string: &str) -> Option<StringSnapshot> {
        let hash = parse_hash(hash_string)?;
        self.inner.try_get_snapshot(hash).map(StringSnapshot::from)
    }

    pub fn get_committed_diff(&self) -> Vec<StringDiff> {
        self.inner
            .get_committed_diff()
            .into_iter()
            .map(StringDiff::from)
            .collect()
    }

    pub fn get_uncommitted_diff(&self) -> Vec<StringDiff> {
        self.inner
            .get_uncommitted_diff()
            .into_iter()
            .map(StringDiff::from)
            .collect()
    }

    pub fn get_full_diff(&self) -> Vec<StringDiff> {
        self.inner
            .get_full_diff()
            .into_iter()
            .map(StringDiff::from)
            .collect()
    }

    pub fn get_full_current_snapshot(&self) -> Vec<StringSnapshot> {
        self.inner
            .get_full_current_snapshot()
            .into_iter()
            .map(StringSnapshot::from)
            .collect()
    }
}

impl Default for StringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}
