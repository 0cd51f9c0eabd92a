//! Read-only views returned by [`crate::reader`]: snapshots and diffs.

mod diff;
mod snapshot;

pub use diff::Diff;
pub use snapshot::Snapshot;
