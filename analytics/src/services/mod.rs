//! Vote store implementations
//!
//! Real implementations of the [`VoteStore`](crate::traits::VoteStore) trait.

pub mod memory_store;
pub mod snapshot;
pub mod timed_store;

// Re-export service implementations
pub use memory_store::InMemoryVoteStore;
pub use snapshot::{SnapshotLegislator, SnapshotRollCall, VoteSnapshot};
pub use timed_store::TimedVoteStore;
