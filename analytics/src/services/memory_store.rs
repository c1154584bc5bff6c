//! In-memory vote store
//!
//! Indexes a validated [`VoteSnapshot`] by legislator and by roll call. The
//! store is immutable after construction.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use async_trait::async_trait;
use shared::logging::Component;
use shared::{
    component_debug, CastVote, Congress, LegislatorDetails, LegislatorId, LegislatorSummary,
    RollCall, RollCallId, VoteValue,
};

use crate::error::AnalyticsResult;
use crate::services::snapshot::VoteSnapshot;
use crate::traits::VoteStore;

#[derive(Debug, Clone)]
struct LegislatorRecord {
    details: LegislatorDetails,
    congresses: BTreeSet<Congress>,
}

/// Vote store answering from memory
#[derive(Debug, Default)]
pub struct InMemoryVoteStore {
    legislators: HashMap<LegislatorId, LegislatorRecord>,
    roll_calls: HashMap<RollCallId, RollCall>,
    votes_by_roll_call: HashMap<RollCallId, Vec<CastVote>>,
    votes_by_legislator: HashMap<LegislatorId, Vec<(RollCallId, VoteValue)>>,
}

impl InMemoryVoteStore {
    /// Build the indexes from a snapshot, validating it first
    pub fn from_snapshot(snapshot: VoteSnapshot) -> AnalyticsResult<Self> {
        snapshot.validate()?;

        let mut store = Self::default();
        for entry in snapshot.legislators {
            let id = entry.legislator.bioguide_id.clone();
            store.legislators.insert(
                id,
                LegislatorRecord {
                    details: LegislatorDetails {
                        legislator: entry.legislator,
                        party: entry.party,
                        state: entry.state,
                    },
                    congresses: entry.congresses.into_iter().collect(),
                },
            );
        }

        let mut roll_calls = snapshot.roll_calls;
        roll_calls.sort_by(|a, b| {
            a.roll_call
                .when
                .cmp(&b.roll_call.when)
                .then_with(|| a.roll_call.id().cmp(&b.roll_call.id()))
        });

        for entry in roll_calls {
            let roll_call_id = entry.roll_call.id();
            for cast in &entry.votes {
                // voting in a congress implies membership of it
                if let Some(record) = store.legislators.get_mut(&cast.legislator_id) {
                    record.congresses.insert(entry.roll_call.congress);
                }
                store
                    .votes_by_legislator
                    .entry(cast.legislator_id.clone())
                    .or_default()
                    .push((roll_call_id.clone(), cast.vote.clone()));
            }
            store.votes_by_roll_call.insert(roll_call_id.clone(), entry.votes);
            store.roll_calls.insert(roll_call_id, entry.roll_call);
        }

        component_debug!(
            Component::Store,
            legislators = store.legislators.len(),
            roll_calls = store.roll_calls.len(),
            "Indexed vote snapshot"
        );
        Ok(store)
    }

    /// Load a snapshot file and index it
    pub async fn load(path: impl AsRef<Path>) -> AnalyticsResult<Self> {
        Self::from_snapshot(VoteSnapshot::load(path).await?)
    }

    /// Members of `congress`, ordered by family name, given name, then id
    fn members_of(&self, congress: Congress) -> Vec<&LegislatorRecord> {
        let mut members: Vec<&LegislatorRecord> = self
            .legislators
            .values()
            .filter(|record| record.congresses.contains(&congress))
            .collect();
        members.sort_by(|a, b| {
            let (a, b) = (&a.details.legislator, &b.details.legislator);
            a.family_name
                .cmp(&b.family_name)
                .then_with(|| a.given_name.cmp(&b.given_name))
                .then_with(|| a.bioguide_id.cmp(&b.bioguide_id))
        });
        members
    }
}

#[async_trait]
impl VoteStore for InMemoryVoteStore {
    async fn list_legislators(&self, congress: Congress) -> AnalyticsResult<Vec<LegislatorSummary>> {
        Ok(self
            .members_of(congress)
            .into_iter()
            .map(|record| record.details.summary())
            .collect())
    }

    async fn get_legislator(
        &self,
        congress: Congress,
        family_name: &str,
        state: &str,
    ) -> AnalyticsResult<Option<LegislatorDetails>> {
        Ok(self
            .members_of(congress)
            .into_iter()
            .find(|record| {
                record.details.legislator.family_name == family_name && record.details.state == state
            })
            .map(|record| record.details.clone()))
    }

    async fn list_votes_by_legislator(
        &self,
        legislator_id: &LegislatorId,
    ) -> AnalyticsResult<Vec<(RollCall, VoteValue)>> {
        let Some(ballots) = self.votes_by_legislator.get(legislator_id) else {
            return Ok(Vec::new());
        };
        Ok(ballots
            .iter()
            .filter_map(|(roll_call_id, vote)| {
                self.roll_calls
                    .get(roll_call_id)
                    .map(|roll_call| (roll_call.clone(), vote.clone()))
            })
            .collect())
    }

    async fn list_voters_on(&self, roll_call_id: &RollCallId) -> AnalyticsResult<Vec<CastVote>> {
        Ok(self
            .votes_by_roll_call
            .get(roll_call_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn party_members(
        &self,
        party_abbreviation: &str,
        congress: Congress,
    ) -> AnalyticsResult<Vec<LegislatorId>> {
        Ok(self
            .members_of(congress)
            .into_iter()
            .filter(|record| record.details.party.abbreviation == party_abbreviation)
            .map(|record| record.details.legislator.bioguide_id.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::snapshot::{SnapshotLegislator, SnapshotRollCall};
    use chrono::{TimeZone, Utc};
    use shared::{Chamber, Legislator, Party};

    fn legislator(id: &str, family: &str, party: Party, state: &str) -> SnapshotLegislator {
        SnapshotLegislator {
            legislator: Legislator {
                bioguide_id: LegislatorId::new(id).unwrap(),
                given_name: format!("{family}-given"),
                family_name: family.to_string(),
                middle_name: None,
                nick_name: None,
                honorific_prefix: None,
                honorific_suffix: None,
                image: None,
            },
            party,
            state: state.to_string(),
            congresses: Vec::new(),
        }
    }

    fn roll_call(congress: u32, number: u32, votes: &[(&str, VoteValue)]) -> SnapshotRollCall {
        SnapshotRollCall {
            roll_call: RollCall {
                chamber: Chamber::House,
                congress: Congress(congress),
                session: 1,
                number,
                when: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(i64::from(number)),
                question: "On Passage".to_string(),
            },
            votes: votes
                .iter()
                .map(|(who, vote)| CastVote::new(LegislatorId::new(*who).unwrap(), vote.clone()))
                .collect(),
        }
    }

    fn store() -> InMemoryVoteStore {
        InMemoryVoteStore::from_snapshot(VoteSnapshot {
            legislators: vec![
                legislator("B1", "Baker", Party::republican(), "OH"),
                legislator("A1", "Adams", Party::democrat(), "MA"),
                legislator("C1", "Clark", Party::democrat(), "NY"),
            ],
            roll_calls: vec![
                roll_call(119, 2, &[("A1", VoteValue::Nay), ("B1", VoteValue::Yea)]),
                roll_call(119, 1, &[("A1", VoteValue::Yea), ("B1", VoteValue::Yea)]),
                roll_call(118, 9, &[("A1", VoteValue::Yea), ("C1", VoteValue::Yea)]),
            ],
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_membership_derived_from_votes() {
        let store = store();
        let current = store.list_legislators(Congress(119)).await.unwrap();
        let names: Vec<&str> = current.iter().map(|s| s.family_name.as_str()).collect();
        assert_eq!(names, vec!["Adams", "Baker"]);

        let previous = store.list_legislators(Congress(118)).await.unwrap();
        assert_eq!(previous.len(), 2);
        assert!(store.list_legislators(Congress(90)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_legislator_by_name_and_state() {
        let store = store();
        let found = store.get_legislator(Congress(119), "Adams", "MA").await.unwrap().unwrap();
        assert_eq!(found.party, Party::democrat());

        assert!(store.get_legislator(Congress(119), "Adams", "OH").await.unwrap().is_none());
        assert!(store.get_legislator(Congress(119), "Clark", "NY").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_votes_ordered_by_date() {
        let store = store();
        let ballots = store
            .list_votes_by_legislator(&LegislatorId::new("A1").unwrap())
            .await
            .unwrap();
        let numbers: Vec<u32> = ballots.iter().map(|(rc, _)| rc.number).collect();
        assert_eq!(numbers, vec![1, 2, 9]);

        let unknown = store
            .list_votes_by_legislator(&LegislatorId::new("ZZ").unwrap())
            .await
            .unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_party_members_and_voters() {
        let store = store();
        let democrats = store.party_members("D", Congress(119)).await.unwrap();
        assert_eq!(democrats, vec![LegislatorId::new("A1").unwrap()]);

        let voters = store
            .list_voters_on(&RollCallId::new("house-119-1-2").unwrap())
            .await
            .unwrap();
        assert_eq!(voters.len(), 2);
        assert!(store
            .list_voters_on(&RollCallId::new("senate-1-1-1").unwrap())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_shared_roll_calls_scoped_to_congress() {
        let store = store();
        let shared = store
            .list_shared_roll_calls(&LegislatorId::new("A1").unwrap(), Congress(119))
            .await
            .unwrap();
        assert_eq!(shared.len(), 2);
        assert!(shared.iter().all(|rc| rc.roll_call.congress == Congress(119)));
        assert!(shared.iter().all(|rc| rc.votes.len() == 2));
    }
}
