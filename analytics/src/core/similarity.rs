//! Pairwise similarity between one legislator and every co-voter
//!
//! Agreement is accumulated roll call by roll call, so each roll call only
//! touches the legislators who actually voted on it. Two legislators agree on
//! a roll call when they recorded the same value, the abstain marker included.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::{LegislatorId, LegislatorSummary, RollCallVotes};

/// Raw agreement counts for one pair of legislators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgreementCounts {
    pub votes_together: u32,
    pub votes_against: u32,
}

impl AgreementCounts {
    pub fn record(&mut self, agreed: bool) {
        if agreed {
            self.votes_together += 1;
        } else {
            self.votes_against += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.votes_together + self.votes_against
    }

    /// Compare agreement rates exactly, highest rate first
    fn cmp_rate_desc(&self, other: &Self) -> Ordering {
        let lhs = u64::from(other.votes_together) * u64::from(self.total());
        let rhs = u64::from(self.votes_together) * u64::from(other.total());
        lhs.cmp(&rhs)
    }
}

/// Agreement between the analysed legislator and one other legislator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseSimilarity {
    pub other: LegislatorSummary,
    pub votes_together: u32,
    pub votes_against: u32,
    pub votes_total: u32,
    pub percent_agreement: f64,
}

/// Ranks co-voters by agreement rate
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    min_vote_threshold: u32,
}

impl SimilarityEngine {
    pub fn new(min_vote_threshold: u32) -> Self {
        Self { min_vote_threshold }
    }

    pub fn min_vote_threshold(&self) -> u32 {
        self.min_vote_threshold
    }

    /// Accumulate agreement counts against every co-voter of `legislator_id`
    pub fn accumulate(
        legislator_id: &LegislatorId,
        roll_calls: &[RollCallVotes],
    ) -> HashMap<LegislatorId, AgreementCounts> {
        let mut counts: HashMap<LegislatorId, AgreementCounts> = HashMap::new();

        for roll_call in roll_calls {
            let Some(own_vote) = roll_call.vote_of(legislator_id) else {
                continue;
            };
            for cast in roll_call.votes.iter().filter(|cast| &cast.legislator_id != legislator_id) {
                counts
                    .entry(cast.legislator_id.clone())
                    .or_default()
                    .record(cast.vote == *own_vote);
            }
        }

        counts
    }

    /// Apply the threshold, attach metadata and order the survivors
    ///
    /// A pair is kept only when its shared vote count is strictly greater than
    /// the threshold. Co-voters without a summary are dropped. Ties in rate are
    /// broken by legislator id.
    pub fn rank(
        &self,
        counts: HashMap<LegislatorId, AgreementCounts>,
        summaries: &HashMap<LegislatorId, LegislatorSummary>,
    ) -> Vec<PairwiseSimilarity> {
        let mut kept: Vec<(LegislatorId, AgreementCounts)> = counts
            .into_iter()
            .filter(|(_, c)| c.total() > self.min_vote_threshold && c.total() > 0)
            .collect();

        kept.sort_by(|(a_id, a), (b_id, b)| a.cmp_rate_desc(b).then_with(|| a_id.cmp(b_id)));

        kept.into_iter()
            .filter_map(|(id, c)| {
                let other = summaries.get(&id)?.clone();
                Some(PairwiseSimilarity {
                    other,
                    votes_together: c.votes_together,
                    votes_against: c.votes_against,
                    votes_total: c.total(),
                    percent_agreement: f64::from(c.votes_together) / f64::from(c.total()),
                })
            })
            .collect()
    }

    /// Accumulate and rank in one pass
    pub fn similarities(
        &self,
        legislator_id: &LegislatorId,
        roll_calls: &[RollCallVotes],
        summaries: &HashMap<LegislatorId, LegislatorSummary>,
    ) -> Vec<PairwiseSimilarity> {
        self.rank(Self::accumulate(legislator_id, roll_calls), summaries)
    }
}
