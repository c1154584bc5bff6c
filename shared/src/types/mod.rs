//! Core types used throughout the vote-agreement system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Bioguide identifier of a legislator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LegislatorId(String);

impl LegislatorId {
    /// Create an id, rejecting blank input
    pub fn new(id: impl Into<String>) -> SharedResult<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidIdentifier { input: id });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LegislatorId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LegislatorId> for String {
    fn from(id: LegislatorId) -> Self {
        id.0
    }
}

impl FromStr for LegislatorId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for LegislatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numbered legislative term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Congress(pub u32);

impl fmt::Display for Congress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Legislative chamber a roll call was held in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chamber {
    #[serde(rename = "house")]
    House,
    #[serde(rename = "senate")]
    Senate,
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chamber::House => write!(f, "house"),
            Chamber::Senate => write!(f, "senate"),
        }
    }
}

impl FromStr for Chamber {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "house" => Ok(Chamber::House),
            "senate" => Ok(Chamber::Senate),
            _ => Err(SharedError::InvalidChamber { input: s.to_string() }),
        }
    }
}

/// Identifier of a single roll call, `{chamber}-{congress}-{session}-{number}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RollCallId(String);

impl RollCallId {
    pub fn new(id: impl Into<String>) -> SharedResult<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidIdentifier { input: id });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RollCallId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RollCallId> for String {
    fn from(id: RollCallId) -> Self {
        id.0
    }
}

impl FromStr for RollCallId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RollCallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded vote event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollCall {
    pub chamber: Chamber,
    pub congress: Congress,
    pub session: u32,
    pub number: u32,
    pub when: DateTime<Utc>,
    pub question: String,
}

impl RollCall {
    /// Stable identifier derived from chamber, congress, session and sequence number
    pub fn id(&self) -> RollCallId {
        RollCallId(format!(
            "{}-{}-{}-{}",
            self.chamber, self.congress, self.session, self.number
        ))
    }
}

/// Value a legislator recorded on a roll call
///
/// The derived ordering is the canonical order used to break ties:
/// Yea, Nay, Present, Not Voting, then any other recorded value lexically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VoteValue {
    Yea,
    Nay,
    Present,
    NotVoting,
    Other(String),
}

impl VoteValue {
    /// Whether this is the abstain marker
    pub fn is_abstain(&self) -> bool {
        matches!(self, VoteValue::NotVoting)
    }
}

impl fmt::Display for VoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteValue::Yea => write!(f, "Yea"),
            VoteValue::Nay => write!(f, "Nay"),
            VoteValue::Present => write!(f, "Present"),
            VoteValue::NotVoting => write!(f, "Not Voting"),
            VoteValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for VoteValue {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(SharedError::InvalidVoteValue { input: s.to_string() }),
            "Yea" => Ok(VoteValue::Yea),
            "Nay" => Ok(VoteValue::Nay),
            "Present" => Ok(VoteValue::Present),
            "Not Voting" => Ok(VoteValue::NotVoting),
            other => Ok(VoteValue::Other(other.to_string())),
        }
    }
}

impl TryFrom<String> for VoteValue {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VoteValue> for String {
    fn from(value: VoteValue) -> Self {
        value.to_string()
    }
}

/// Political party
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub abbreviation: String,
}

impl Party {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }

    pub fn republican() -> Self {
        Self::new("Republican", "R")
    }

    pub fn democrat() -> Self {
        Self::new("Democrat", "D")
    }

    /// Resolve a party from its full name, as recorded by the clerk
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Republican" => Some(Self::republican()),
            "Democrat" => Some(Self::democrat()),
            "Independent" => Some(Self::new("Independent", "I")),
            _ => None,
        }
    }

    /// Resolve a party from its abbreviation, keeping unknown abbreviations as-is
    pub fn from_abbreviation(abbreviation: &str) -> Self {
        match abbreviation {
            "R" => Self::republican(),
            "D" => Self::democrat(),
            "I" => Self::new("Independent", "I"),
            other => Self::new(other, other),
        }
    }
}

/// Biographical record of a legislator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legislator {
    pub bioguide_id: LegislatorId,
    pub given_name: String,
    pub family_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorific_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorific_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Listing view of a legislator with current party and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislatorSummary {
    pub bioguide_id: LegislatorId,
    pub given_name: String,
    pub family_name: String,
    pub state: String,
    pub party: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl LegislatorSummary {
    /// "Family, Given (P-ST)"
    pub fn display_name(&self) -> String {
        format!(
            "{}, {} ({}-{})",
            self.family_name, self.given_name, self.party, self.state
        )
    }
}

/// Full record of a legislator with current party and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislatorDetails {
    pub legislator: Legislator,
    pub party: Party,
    pub state: String,
}

impl LegislatorDetails {
    pub fn summary(&self) -> LegislatorSummary {
        LegislatorSummary {
            bioguide_id: self.legislator.bioguide_id.clone(),
            given_name: self.legislator.given_name.clone(),
            family_name: self.legislator.family_name.clone(),
            state: self.state.clone(),
            party: self.party.abbreviation.clone(),
            image: self.legislator.image.clone(),
        }
    }
}

/// One legislator's recorded value on a roll call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastVote {
    pub legislator_id: LegislatorId,
    pub vote: VoteValue,
}

impl CastVote {
    pub fn new(legislator_id: LegislatorId, vote: VoteValue) -> Self {
        Self { legislator_id, vote }
    }
}

/// A roll call together with every vote recorded on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollCallVotes {
    pub roll_call: RollCall,
    pub votes: Vec<CastVote>,
}

impl RollCallVotes {
    /// The value a given legislator recorded, if they participated
    pub fn vote_of(&self, legislator_id: &LegislatorId) -> Option<&VoteValue> {
        self.votes
            .iter()
            .find(|cast| &cast.legislator_id == legislator_id)
            .map(|cast| &cast.vote)
    }
}
