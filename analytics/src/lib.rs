//! Vote-agreement analytics
//!
//! Given a legislator and a congress, computes how often the legislator votes
//! with the majority of each major party and how often they agree with every
//! colleague who shares enough recorded votes. Vote facts are read through the
//! injected [`VoteStore`] trait, so the engine is independent of storage.

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::AnalyticsConfig;
pub use core::{
    LegislatorCard, LegislatorReport, MajorPartyAlignment, PairwiseSimilarity, PartyAlignment,
    SimilarityRow,
};
pub use engine::VoteAnalytics;
pub use error::{AnalyticsError, AnalyticsResult};
pub use services::{InMemoryVoteStore, TimedVoteStore, VoteSnapshot};
pub use traits::{MockVoteStore, VoteStore};
