//! Bounded-time vote store decorator
//!
//! Wraps another [`VoteStore`] and fails any fetch that does not complete
//! within the configured timeout. A timeout is reported as a store failure;
//! it is not retried.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use shared::logging::Component;
use shared::{
    component_warn, CastVote, Congress, LegislatorDetails, LegislatorId, LegislatorSummary,
    RollCall, RollCallId, RollCallVotes, VoteValue,
};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::traits::VoteStore;

/// Applies a timeout to every call on the inner store
pub struct TimedVoteStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S: VoteStore> TimedVoteStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T, F>(&self, operation: &str, fetch: F) -> AnalyticsResult<T>
    where
        F: Future<Output = AnalyticsResult<T>> + Send,
        T: Send,
    {
        match tokio::time::timeout(self.timeout, fetch).await {
            Ok(result) => result,
            Err(_) => {
                component_warn!(
                    Component::Store,
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Vote store fetch timed out"
                );
                Err(AnalyticsError::StoreTimeout {
                    operation: operation.to_string(),
                    timeout: self.timeout,
                })
            }
        }
    }
}

#[async_trait]
impl<S: VoteStore> VoteStore for TimedVoteStore<S> {
    async fn list_legislators(&self, congress: Congress) -> AnalyticsResult<Vec<LegislatorSummary>> {
        self.bounded("list_legislators", self.inner.list_legislators(congress))
            .await
    }

    async fn get_legislator(
        &self,
        congress: Congress,
        family_name: &str,
        state: &str,
    ) -> AnalyticsResult<Option<LegislatorDetails>> {
        self.bounded(
            "get_legislator",
            self.inner.get_legislator(congress, family_name, state),
        )
        .await
    }

    async fn list_votes_by_legislator(
        &self,
        legislator_id: &LegislatorId,
    ) -> AnalyticsResult<Vec<(RollCall, VoteValue)>> {
        self.bounded(
            "list_votes_by_legislator",
            self.inner.list_votes_by_legislator(legislator_id),
        )
        .await
    }

    async fn list_voters_on(&self, roll_call_id: &RollCallId) -> AnalyticsResult<Vec<CastVote>> {
        self.bounded("list_voters_on", self.inner.list_voters_on(roll_call_id))
            .await
    }

    async fn party_members(
        &self,
        party_abbreviation: &str,
        congress: Congress,
    ) -> AnalyticsResult<Vec<LegislatorId>> {
        self.bounded(
            "party_members",
            self.inner.party_members(party_abbreviation, congress),
        )
        .await
    }

    // One bound for the whole joined fetch, however the inner store performs it
    async fn list_shared_roll_calls(
        &self,
        legislator_id: &LegislatorId,
        congress: Congress,
    ) -> AnalyticsResult<Vec<RollCallVotes>> {
        self.bounded(
            "list_shared_roll_calls",
            self.inner.list_shared_roll_calls(legislator_id, congress),
        )
        .await
    }
}
