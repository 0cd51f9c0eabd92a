use super::identity::TokenId;

/// A hash naming a token at a point in time. `None` means "no hash assigned".
pub type Hash = Option<i64>;

/// `(initial, previous, current)` hash triple for one identity.
///
/// - `initial` is the seed hash, or `None` if the token was never seeded
///   (it was created by an insert).
/// - `previous` is the hash prior to the last commit; it mirrors `current`
///   immediately after seeding and advances on every subsequent commit.
/// - `current` is the most recently committed hash; `None` iff the token
///   has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenState {
    pub initial: Hash,
    pub previous: Hash,
    pub current: Hash,
}

impl TokenState {
    /// State for a freshly seeded token: all three slots equal the seed hash.
    pub fn seeded(hash: i64) -> Self {
        Self {
            initial: Some(hash),
            previous: Some(hash),
            current: Some(hash),
        }
    }

    /// State for a token created by an unstaged insert: all slots `None`
    /// until the insert commits.
    pub fn inserted() -> Self {
        Self {
            initial: None,
            previous: None,
            current: None,
        }
    }
}

/// Pending change for one identity, staged but not yet committed.
///
/// `Some(hash)` is an insert/modify target; `Some(None)` (the tombstone)
/// is a staged deletion. Absence from the staging map (not represented by
/// this type) means no pending change.
pub type StagedTarget = Hash;

/// One entry in the committed-change log, produced by the most recent
/// `Commit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRecord {
    pub identity: TokenId,
    pub left: Hash,
    pub right: Hash,
}
