//! Token identity, hash history, and the committed-change record.

mod identity;
mod state;

pub use identity::{TokenId, TokenIdAllocator};
pub use state::{ChangeRecord, Hash, StagedTarget, TokenState};
