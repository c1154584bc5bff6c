//! JSON vote snapshots
//!
//! A snapshot is a self-contained export of legislators and roll calls with
//! their votes. It is validated when loaded so the engine never sees dangling
//! references or duplicate votes.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::logging::{self, Component};
use shared::{CastVote, Congress, Legislator, LegislatorId, Party, RollCall};

use crate::error::{AnalyticsError, AnalyticsResult};

/// A legislator with current party, state and congress memberships
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotLegislator {
    #[serde(flatten)]
    pub legislator: Legislator,
    pub party: Party,
    pub state: String,
    #[serde(default)]
    pub congresses: Vec<Congress>,
}

/// A roll call with every vote recorded on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRollCall {
    #[serde(flatten)]
    pub roll_call: RollCall,
    pub votes: Vec<CastVote>,
}

/// Complete export of vote facts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteSnapshot {
    pub legislators: Vec<SnapshotLegislator>,
    pub roll_calls: Vec<SnapshotRollCall>,
}

impl VoteSnapshot {
    /// Read, parse and validate a snapshot file
    pub async fn load(path: impl AsRef<Path>) -> AnalyticsResult<Self> {
        let path = path.as_ref();
        logging::log_progress(Component::Store, "Loading vote snapshot", &path.display().to_string());

        let raw = tokio::fs::read_to_string(path).await?;
        let snapshot = Self::from_json(&raw)?;

        logging::log_progress(
            Component::Store,
            "Loaded vote snapshot",
            &format!(
                "{} legislators, {} roll calls",
                snapshot.legislators.len(),
                snapshot.roll_calls.len()
            ),
        );
        Ok(snapshot)
    }

    /// Parse and validate a snapshot document
    pub fn from_json(raw: &str) -> AnalyticsResult<Self> {
        let snapshot: Self = serde_json::from_str(raw)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reject duplicate ids, votes by unknown legislators and repeated votes
    pub fn validate(&self) -> AnalyticsResult<()> {
        let mut known: HashSet<&LegislatorId> = HashSet::new();
        for entry in &self.legislators {
            if !known.insert(&entry.legislator.bioguide_id) {
                return Err(AnalyticsError::malformed(format!(
                    "duplicate legislator {}",
                    entry.legislator.bioguide_id
                )));
            }
            if entry.party.abbreviation.trim().is_empty() {
                return Err(AnalyticsError::malformed(format!(
                    "legislator {} has no party abbreviation",
                    entry.legislator.bioguide_id
                )));
            }
        }

        let mut roll_call_ids = HashSet::new();
        for entry in &self.roll_calls {
            let roll_call_id = entry.roll_call.id();
            if !roll_call_ids.insert(roll_call_id.clone()) {
                return Err(AnalyticsError::malformed(format!("duplicate roll call {roll_call_id}")));
            }

            let mut voters = HashSet::new();
            for cast in &entry.votes {
                if !known.contains(&cast.legislator_id) {
                    return Err(AnalyticsError::malformed(format!(
                        "roll call {roll_call_id} has a vote by unknown legislator {}",
                        cast.legislator_id
                    )));
                }
                if !voters.insert(&cast.legislator_id) {
                    return Err(AnalyticsError::malformed(format!(
                        "legislator {} voted more than once on roll call {roll_call_id}",
                        cast.legislator_id
                    )));
                }
            }
        }

        Ok(())
    }
}
