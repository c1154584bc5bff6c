//! Party alignment: how often a legislator votes with a party's majority

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::{LegislatorId, RollCallVotes};

use crate::core::majority::MajorityResolver;

/// Agreement of one legislator with one party's majority position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartyAlignment {
    pub votes_with: u32,
    pub votes_against: u32,
    pub total_votes: u32,
    pub percent_with: f64,
}

impl PartyAlignment {
    /// Build from raw counts; `None` when there is nothing to compare
    pub fn from_counts(votes_with: u32, total_votes: u32) -> Option<Self> {
        if total_votes == 0 || votes_with > total_votes {
            return None;
        }
        Some(Self {
            votes_with,
            votes_against: total_votes - votes_with,
            total_votes,
            percent_with: f64::from(votes_with) / f64::from(total_votes),
        })
    }
}

/// Alignment against both major parties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MajorPartyAlignment {
    pub republican: PartyAlignment,
    pub democrat: PartyAlignment,
}

/// Compares a legislator's substantive votes with a party's majority
pub struct AlignmentCalculator;

impl AlignmentCalculator {
    /// Compute alignment over the roll calls the legislator took part in
    ///
    /// The legislator's own "Not Voting" entries are not comparable and are
    /// skipped, as are roll calls where no party member voted.
    pub fn compute(
        legislator_id: &LegislatorId,
        party_members: &HashSet<LegislatorId>,
        roll_calls: &[RollCallVotes],
    ) -> Option<PartyAlignment> {
        let resolver = MajorityResolver::new(party_members);
        let mut votes_with = 0u32;
        let mut total_votes = 0u32;

        for roll_call in roll_calls {
            let Some(own_vote) = roll_call.vote_of(legislator_id) else {
                continue;
            };
            if own_vote.is_abstain() {
                continue;
            }
            let Some(majority) = resolver.resolve(&roll_call.votes) else {
                continue;
            };

            total_votes += 1;
            if *own_vote == majority {
                votes_with += 1;
            }
        }

        PartyAlignment::from_counts(votes_with, total_votes)
    }
}
