//! Test helpers and builder patterns for analytics tests
//!
//! [`SnapshotBuilder`] assembles small vote snapshots roll call by roll call,
//! and [`TestHelpers`] wires snapshots or mocks into an engine.

use std::time::Duration;

use analytics::services::{SnapshotLegislator, SnapshotRollCall};
use analytics::{
    AnalyticsConfig, InMemoryVoteStore, MockVoteStore, PartyAlignment, VoteAnalytics, VoteSnapshot,
};
use shared::{CastVote, Party, VoteValue};

use super::fixtures::TestFixtures;

/// Builder for vote snapshots with sensible defaults
pub struct SnapshotBuilder {
    snapshot: VoteSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: VoteSnapshot::default(),
        }
    }

    /// Add a legislator; `party` is an abbreviation
    pub fn with_legislator(mut self, id: &str, family_name: &str, party: &str, state: &str) -> Self {
        self.snapshot.legislators.push(SnapshotLegislator {
            legislator: TestFixtures::legislator(id, "Test", family_name),
            party: Party::from_abbreviation(party),
            state: state.to_string(),
            congresses: Vec::new(),
        });
        self
    }

    /// Add a roll call of the standard congress
    pub fn with_roll_call(self, number: u32, votes: &[(&str, VoteValue)]) -> Self {
        self.with_roll_call_in(TestFixtures::CONGRESS, number, votes)
    }

    pub fn with_roll_call_in(mut self, congress: u32, number: u32, votes: &[(&str, VoteValue)]) -> Self {
        self.snapshot.roll_calls.push(SnapshotRollCall {
            roll_call: TestFixtures::roll_call(congress, number),
            votes: votes
                .iter()
                .map(|(id, vote)| CastVote::new(TestFixtures::id(id), vote.clone()))
                .collect(),
        });
        self
    }

    pub fn build(self) -> VoteSnapshot {
        self.snapshot
    }

    /// Index the snapshot and wrap it in an engine
    pub fn engine(self, min_vote_threshold: u32) -> VoteAnalytics<InMemoryVoteStore> {
        let store = InMemoryVoteStore::from_snapshot(self.build()).unwrap();
        VoteAnalytics::new(store, TestHelpers::config(min_vote_threshold))
    }
}

/// Helper utilities for common test operations
pub struct TestHelpers;

impl TestHelpers {
    pub fn config(min_vote_threshold: u32) -> AnalyticsConfig {
        AnalyticsConfig::new(TestFixtures::PHOTO_ROOT, TestFixtures::SNAPSHOT_PATH)
            .with_congress(TestFixtures::congress())
            .with_min_vote_threshold(min_vote_threshold)
            .with_fetch_timeout(Duration::from_secs(5))
    }

    pub fn mock_engine(store: MockVoteStore) -> VoteAnalytics<MockVoteStore> {
        VoteAnalytics::new(store, Self::config(AnalyticsConfig::DEFAULT_MIN_VOTE_THRESHOLD))
    }

    /// Subject plus three Republicans and two Democrats
    pub fn standard_chamber() -> SnapshotBuilder {
        SnapshotBuilder::new()
            .with_legislator(TestFixtures::SUBJECT, "Stone", "I", "VT")
            .with_legislator(TestFixtures::REPUBLICAN_1, "Reed", "R", "OH")
            .with_legislator(TestFixtures::REPUBLICAN_2, "Ross", "R", "TX")
            .with_legislator(TestFixtures::REPUBLICAN_3, "Rowe", "R", "FL")
            .with_legislator(TestFixtures::DEMOCRAT_1, "Dean", "D", "CA")
            .with_legislator(TestFixtures::DEMOCRAT_2, "Diaz", "D", "NY")
    }

    /// Assert the arithmetic that ties alignment counts together
    pub fn assert_alignment_consistent(alignment: &PartyAlignment) {
        assert_eq!(alignment.votes_with + alignment.votes_against, alignment.total_votes);
        assert!(alignment.total_votes > 0);
        assert!((0.0..=1.0).contains(&alignment.percent_with));
        let expected = f64::from(alignment.votes_with) / f64::from(alignment.total_votes);
        assert!((alignment.percent_with - expected).abs() < 1e-12);
    }
}
