//! Vote-agreement engine
//!
//! Wires the injected [`VoteStore`] to the pure calculators in [`crate::core`].
//! The engine holds no mutable state; every call recomputes from the store.

use std::collections::{HashMap, HashSet};

use shared::logging::Component;
use shared::{
    component_debug, component_info, LegislatorId, LegislatorSummary, Party, RollCallId,
    RollCallVotes, VoteValue,
};

use crate::config::AnalyticsConfig;
use crate::core::{
    AlignmentCalculator, LegislatorCard, LegislatorReport, MajorPartyAlignment, MajorityResolver,
    PairwiseSimilarity, PartyAlignment, ResultAssembler, SimilarityEngine,
};
use crate::error::AnalyticsResult;
use crate::traits::VoteStore;

/// Vote-agreement analytics over an injected vote store
pub struct VoteAnalytics<S> {
    store: S,
    config: AnalyticsConfig,
    assembler: ResultAssembler,
}

impl<S: VoteStore> VoteAnalytics<S> {
    pub fn new(store: S, config: AnalyticsConfig) -> Self {
        let assembler = ResultAssembler::new(config.photo_base_url.clone());
        Self {
            store,
            config,
            assembler,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Legislators of the configured congress, ready for listing
    pub async fn list_legislators(&self) -> AnalyticsResult<Vec<LegislatorCard>> {
        let summaries = self.store.list_legislators(self.config.current_congress).await?;
        Ok(summaries
            .into_iter()
            .map(|summary| self.assembler.card(summary))
            .collect())
    }

    /// Majority position of `party` on one roll call
    ///
    /// `None` when no current member of the party recorded a vote on it.
    pub async fn resolve_majority(
        &self,
        party: &Party,
        roll_call_id: &RollCallId,
    ) -> AnalyticsResult<Option<VoteValue>> {
        let (members, votes) = tokio::try_join!(
            self.party_member_set(party),
            self.store.list_voters_on(roll_call_id)
        )?;

        let majority = MajorityResolver::new(&members).resolve(&votes);
        component_debug!(
            Component::Engine,
            party = %party.abbreviation,
            roll_call = %roll_call_id,
            voters = votes.len(),
            "Resolved majority: {:?}",
            majority
        );
        Ok(majority)
    }

    /// How often a legislator votes with `party`'s majority
    pub async fn alignment(
        &self,
        legislator_id: &LegislatorId,
        party: &Party,
    ) -> AnalyticsResult<Option<PartyAlignment>> {
        let (roll_calls, members) = tokio::try_join!(
            self.shared_roll_calls(legislator_id),
            self.party_member_set(party)
        )?;
        Ok(AlignmentCalculator::compute(legislator_id, &members, &roll_calls))
    }

    /// Alignment against both major parties, `None` unless both are available
    pub async fn alignment_for_major_parties(
        &self,
        legislator_id: &LegislatorId,
    ) -> AnalyticsResult<Option<MajorPartyAlignment>> {
        let roll_calls = self.shared_roll_calls(legislator_id).await?;
        let republican = Party::republican();
        let democrat = Party::democrat();

        let (republican, democrat) = tokio::try_join!(
            self.alignment_over(legislator_id, &republican, &roll_calls),
            self.alignment_over(legislator_id, &democrat, &roll_calls)
        )?;

        match (republican, democrat) {
            (Some(republican), Some(democrat)) => Ok(Some(MajorPartyAlignment {
                republican,
                democrat,
            })),
            (republican, democrat) => {
                component_debug!(
                    Component::Engine,
                    legislator = %legislator_id,
                    republican = republican.is_some(),
                    democrat = democrat.is_some(),
                    "Major party alignment unavailable"
                );
                Ok(None)
            }
        }
    }

    /// Agreement with every co-voter sharing more than `min_vote_threshold` votes
    pub async fn similarities_for(
        &self,
        legislator_id: &LegislatorId,
        min_vote_threshold: u32,
    ) -> AnalyticsResult<Vec<PairwiseSimilarity>> {
        let (roll_calls, summaries) = tokio::try_join!(
            self.shared_roll_calls(legislator_id),
            self.store.list_legislators(self.config.current_congress)
        )?;
        let summaries: HashMap<LegislatorId, LegislatorSummary> = summaries
            .into_iter()
            .map(|summary| (summary.bioguide_id.clone(), summary))
            .collect();

        let counts = SimilarityEngine::accumulate(legislator_id, &roll_calls);
        let candidates = counts.len();
        let ranked = SimilarityEngine::new(min_vote_threshold).rank(counts, &summaries);

        component_debug!(
            Component::Engine,
            legislator = %legislator_id,
            roll_calls = roll_calls.len(),
            candidates,
            reported = ranked.len(),
            threshold = min_vote_threshold,
            "Computed pairwise similarity"
        );
        Ok(ranked)
    }

    /// Full report for the legislator with `family_name` representing `state`
    pub async fn report(
        &self,
        family_name: &str,
        state: &str,
    ) -> AnalyticsResult<Option<LegislatorReport>> {
        let Some(details) = self
            .store
            .get_legislator(self.config.current_congress, family_name, state)
            .await?
        else {
            component_info!(
                Component::Engine,
                "No legislator {} ({}) in congress {}",
                family_name,
                state,
                self.config.current_congress
            );
            return Ok(None);
        };

        let legislator_id = details.legislator.bioguide_id.clone();
        let (party_alignment, similarity) = tokio::try_join!(
            self.alignment_for_major_parties(&legislator_id),
            self.similarities_for(&legislator_id, self.config.min_vote_threshold)
        )?;

        Ok(Some(self.assembler.report(details, party_alignment, similarity)))
    }

    async fn shared_roll_calls(&self, legislator_id: &LegislatorId) -> AnalyticsResult<Vec<RollCallVotes>> {
        self.store
            .list_shared_roll_calls(legislator_id, self.config.current_congress)
            .await
    }

    async fn party_member_set(&self, party: &Party) -> AnalyticsResult<HashSet<LegislatorId>> {
        let members = self
            .store
            .party_members(&party.abbreviation, self.config.current_congress)
            .await?;
        Ok(members.into_iter().collect())
    }

    async fn alignment_over(
        &self,
        legislator_id: &LegislatorId,
        party: &Party,
        roll_calls: &[RollCallVotes],
    ) -> AnalyticsResult<Option<PartyAlignment>> {
        let members = self.party_member_set(party).await?;
        Ok(AlignmentCalculator::compute(legislator_id, &members, roll_calls))
    }
}
