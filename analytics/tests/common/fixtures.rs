//! Test fixtures and data for analytics tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use shared::{
    Chamber, Congress, Legislator, LegislatorDetails, LegislatorId, LegislatorSummary, Party,
    RollCall, RollCallId, VoteValue,
};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard legislator ids
    pub const SUBJECT: &'static str = "S000001";
    pub const REPUBLICAN_1: &'static str = "R000001";
    pub const REPUBLICAN_2: &'static str = "R000002";
    pub const REPUBLICAN_3: &'static str = "R000003";
    pub const DEMOCRAT_1: &'static str = "D000001";
    pub const DEMOCRAT_2: &'static str = "D000002";

    /// Standard configuration values
    pub const CONGRESS: u32 = 119;
    pub const PHOTO_ROOT: &'static str = "https://photos.test/bioguide/";
    pub const SNAPSHOT_PATH: &'static str = "votes.json";

    pub fn id(raw: &str) -> LegislatorId {
        LegislatorId::new(raw).unwrap()
    }

    pub fn subject_id() -> LegislatorId {
        Self::id(Self::SUBJECT)
    }

    pub fn congress() -> Congress {
        Congress(Self::CONGRESS)
    }

    pub fn legislator(id: &str, given_name: &str, family_name: &str) -> Legislator {
        Legislator {
            bioguide_id: Self::id(id),
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            middle_name: None,
            nick_name: None,
            honorific_prefix: None,
            honorific_suffix: None,
            image: Some(format!("{}.jpg", id.to_lowercase())),
        }
    }

    /// Subject legislator as the store reports it
    pub fn subject_details() -> LegislatorDetails {
        LegislatorDetails {
            legislator: Self::legislator(Self::SUBJECT, "Sam", "Stone"),
            party: Party::from_abbreviation("I"),
            state: "VT".to_string(),
        }
    }

    pub fn summary(id: &str, family_name: &str, party: &str, state: &str) -> LegislatorSummary {
        LegislatorSummary {
            bioguide_id: Self::id(id),
            given_name: "Test".to_string(),
            family_name: family_name.to_string(),
            state: state.to_string(),
            party: party.to_string(),
            image: None,
        }
    }

    /// Base time for roll calls; sequence numbers advance it by a minute each
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, 15, 0, 0).unwrap()
    }

    pub fn roll_call(congress: u32, number: u32) -> RollCall {
        RollCall {
            chamber: Chamber::House,
            congress: Congress(congress),
            session: 1,
            number,
            when: Self::base_time() + Duration::minutes(i64::from(number)),
            question: format!("On Passage of H.R. {number}"),
        }
    }

    pub fn roll_call_id(number: u32) -> RollCallId {
        Self::roll_call(Self::CONGRESS, number).id()
    }

    /// Yea, or Nay when `flipped`
    pub fn yea_or(flipped: bool) -> VoteValue {
        if flipped {
            VoteValue::Nay
        } else {
            VoteValue::Yea
        }
    }
}
