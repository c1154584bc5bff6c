//! Common test utilities and infrastructure
//!
//! Shared fixtures, snapshot builders and helpers used by the analytics test
//! suites.

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{SnapshotBuilder, TestHelpers};
