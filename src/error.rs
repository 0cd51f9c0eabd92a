//! Result and error types for the token store.

use thiserror::Error;

/// Outcome of a mutating operation.
///
/// This is a closed enumeration, not a `Result` error channel: `Success` is
/// itself a value. Mutating methods return it directly rather than wrapping
/// it in `Result<OpResult, _>`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpResult {
    /// The operation completed as requested.
    #[error("success")]
    Success,
    /// The caller tried to introduce a hash that is already in use.
    #[error("hash already in use")]
    DuplicateHash,
    /// The caller referred to a hash that is not presently mapped.
    #[error("hash not found")]
    UnknownHash,
    /// The operation would reassign a claimed hash, or overwrite a pool
    /// value with a conflicting one.
    #[error("conflicting hash or value")]
    Collision,
    /// The identity already has a pending staged change this commit cycle.
    #[error("identity already has a staged change")]
    AlreadyStaged,
    /// Both hashes were absent, or a required hash string failed to parse.
    #[error("invalid input")]
    InvalidInput,
}

impl OpResult {
    /// Returns `true` if the operation succeeded.
    pub fn is_success(self) -> bool {
        matches!(self, OpResult::Success)
    }
}

/// Errors representing a broken implementation invariant rather than a
/// domain-level outcome. A conformant caller never observes these; they
/// exist for the same reason `DbError::LockPoisoned` exists in sibling
/// storage engines — as a recovery path for a prior panic, not a normal
/// control-flow channel.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// The store's mutex was poisoned by a panicking critical section.
    #[error("token store lock poisoned")]
    LockPoisoned,
}
