//! Praise store interface.
//!
//! The handlers depend on this trait; `crate::store` provides the
//! PostgreSQL implementation.

use async_trait::async_trait;

use crate::core::models::{LeaderboardRow, PraiseEntry, VoteDirection, VoteOutcome};
use crate::errors::KudosError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, KudosError>;

#[async_trait]
pub trait PraiseStore: Send + Sync {
    /// Append a praise entry with one initial vote.
    ///
    /// Returns the praised user's new total across all of their entries.
    async fn record_praise(
        &self,
        praise_ts: &str,
        praised_id: &str,
        praiser_id: &str,
        reason: &str,
    ) -> StoreResult<i64>;

    /// Remember the tally message posted for an entry so it can be edited
    /// when the vote count changes.
    async fn record_post(&self, praise_ts: &str, post_ts: &str) -> StoreResult<()>;

    /// Correlate a reaction event to its praise entry and adjust the vote
    /// count, enforcing the party-vote invariant.
    async fn record_vote(
        &self,
        praise_ts: &str,
        reactor_id: &str,
        direction: VoteDirection,
    ) -> StoreResult<VoteOutcome>;

    /// Top users by summed vote count, best first. At most `limit` rows.
    async fn top_users(&self, limit: i64) -> StoreResult<Vec<LeaderboardRow>>;

    /// One user's entries sorted by descending vote count.
    ///
    /// `None` when the user has no record at all.
    async fn user_praises(&self, user_id: &str) -> StoreResult<Option<Vec<PraiseEntry>>>;
}
