//! Party majority resolution for a single roll call
//!
//! Every recorded value of a member counts toward the tally, the abstain
//! marker included. Ties go to the value that sorts first in canonical
//! [`VoteValue`] order (Yea, Nay, Present, Not Voting, then lexical).

use std::collections::{BTreeMap, HashSet};

use shared::{CastVote, LegislatorId, VoteValue};

/// Count how many times each value was recorded, in canonical order
pub fn tally<'a, I>(votes: I) -> BTreeMap<&'a VoteValue, usize>
where
    I: IntoIterator<Item = &'a VoteValue>,
{
    let mut counts = BTreeMap::new();
    for vote in votes {
        *counts.entry(vote).or_insert(0) += 1;
    }
    counts
}

/// Value with the highest count; the canonically smallest wins a tie
pub fn majority_value<'a, I>(votes: I) -> Option<VoteValue>
where
    I: IntoIterator<Item = &'a VoteValue>,
{
    let mut winner: Option<(&VoteValue, usize)> = None;
    for (value, count) in tally(votes) {
        // strictly greater, so the earlier (smaller) value keeps a tie
        if winner.map_or(true, |(_, best)| count > best) {
            winner = Some((value, count));
        }
    }
    winner.map(|(value, _)| value.clone())
}

/// Resolves the majority position of one party's membership
pub struct MajorityResolver<'a> {
    members: &'a HashSet<LegislatorId>,
}

impl<'a> MajorityResolver<'a> {
    pub fn new(members: &'a HashSet<LegislatorId>) -> Self {
        Self { members }
    }

    /// Majority value among the members who voted, `None` if none of them did
    pub fn resolve(&self, votes: &[CastVote]) -> Option<VoteValue> {
        majority_value(
            votes
                .iter()
                .filter(|cast| self.members.contains(&cast.legislator_id))
                .map(|cast| &cast.vote),
        )
    }
}
