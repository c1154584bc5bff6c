//! Data-access trait definitions with mockall annotations for testing
//!
//! The engine reads vote facts exclusively through [`VoteStore`], which is
//! injected at construction. Absence is expressed as `None` or an empty
//! sequence; errors are reserved for a store that fails to answer.

use async_trait::async_trait;
use shared::{
    CastVote, Congress, LegislatorDetails, LegislatorId, LegislatorSummary, RollCall, RollCallId,
    RollCallVotes, VoteValue,
};

use crate::error::AnalyticsResult;

/// Read-only access to legislators, roll calls and recorded votes
#[mockall::automock]
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Every legislator who is a member of the given congress
    async fn list_legislators(&self, congress: Congress) -> AnalyticsResult<Vec<LegislatorSummary>>;

    /// Look up a legislator of the given congress by family name and state code
    async fn get_legislator(
        &self,
        congress: Congress,
        family_name: &str,
        state: &str,
    ) -> AnalyticsResult<Option<LegislatorDetails>>;

    /// Every roll call the legislator participated in, with the value they recorded
    async fn list_votes_by_legislator(
        &self,
        legislator_id: &LegislatorId,
    ) -> AnalyticsResult<Vec<(RollCall, VoteValue)>>;

    /// Every vote recorded on a roll call
    async fn list_voters_on(&self, roll_call_id: &RollCallId) -> AnalyticsResult<Vec<CastVote>>;

    /// Current members of a party in the given congress
    async fn party_members(
        &self,
        party_abbreviation: &str,
        congress: Congress,
    ) -> AnalyticsResult<Vec<LegislatorId>>;

    /// Roll calls of `congress` the legislator participated in, each with every
    /// vote recorded on it (the legislator's own vote included)
    ///
    /// The default composes the two finer-grained reads above. Stores backed by
    /// a remote engine should override it with a single joined query.
    async fn list_shared_roll_calls(
        &self,
        legislator_id: &LegislatorId,
        congress: Congress,
    ) -> AnalyticsResult<Vec<RollCallVotes>> {
        let ballots = self.list_votes_by_legislator(legislator_id).await?;

        let mut shared = Vec::new();
        for (roll_call, _) in ballots.into_iter().filter(|(rc, _)| rc.congress == congress) {
            let votes = self.list_voters_on(&roll_call.id()).await?;
            shared.push(RollCallVotes { roll_call, votes });
        }
        Ok(shared)
    }
}
