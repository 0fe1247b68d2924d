//! Domain models for praise entries and the vote-reconciliation decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded instance of a user praising another.
///
/// The entry's `praise_ts` is the timestamp of the channel message that
/// awarded the praise; reaction events carry the same timestamp and are
/// correlated back to the entry through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PraiseEntry {
    /// Timestamp of the originating praise message. Unique per entry.
    pub praise_ts: String,
    /// The praised user.
    pub praised_id: String,
    /// The praising user.
    pub praiser_id: String,
    /// Free-text reason given with the praise.
    pub reason: String,
    /// Vote count. Starts at 1; reactions move it in either direction and
    /// nothing stops it from going negative.
    pub upvotes: i64,
    /// Timestamp of the bot's posted tally message, once known. Used to edit
    /// that message when the count changes.
    pub post_ts: Option<String>,
    /// Row insertion time. Operational only; no behavior depends on it.
    pub created_at: DateTime<Utc>,
}

impl PraiseEntry {
    /// Whether `user_id` is a party to this entry - its praiser or the
    /// praised user. Parties may not vote on the entry.
    #[must_use]
    pub fn is_party(&self, user_id: &str) -> bool {
        self.praiser_id == user_id || self.praised_id == user_id
    }
}

/// Direction of a vote adjustment derived from a reaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    /// `reaction_added`
    Up,
    /// `reaction_removed`
    Down,
}

impl VoteDirection {
    #[must_use]
    pub fn delta(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

/// Pure decision for one reaction event against the entry (if any) carrying
/// the reacted-to timestamp. The store persists `Apply` decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDecision {
    /// No entry carries this timestamp; the reaction does not concern a praise.
    NotFound,
    /// The reacting user is a party to the entry; the vote is rejected.
    Rejected,
    /// The vote counts; `new_upvotes` is the entry's adjusted count.
    Apply { new_upvotes: i64 },
}

/// Decide how a reaction applies to a praise entry.
#[must_use]
pub fn reconcile_vote(
    entry: Option<&PraiseEntry>,
    reactor_id: &str,
    direction: VoteDirection,
) -> VoteDecision {
    match entry {
        None => VoteDecision::NotFound,
        Some(entry) if entry.is_party(reactor_id) => VoteDecision::Rejected,
        Some(entry) => VoteDecision::Apply {
            new_upvotes: entry.upvotes + direction.delta(),
        },
    }
}

/// Store-level outcome of correlating a reaction event to a praise entry.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    /// The reacted-to message is not a praise message.
    NotFound,
    /// The reacting user is the entry's praiser or the praised user.
    Rejected,
    /// The vote was applied; carries what the handler needs to refresh the
    /// tally post.
    Applied(VoteUpdate),
}

/// Everything the reaction handler needs after a vote is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteUpdate {
    pub praised_id: String,
    pub praiser_id: String,
    pub reason: String,
    /// The entry's vote count after the adjustment.
    pub entry_upvotes: i64,
    /// The praised user's new total across all entries.
    pub total_upvotes: i64,
    /// Timestamp of the tally message to edit, if one was recorded.
    pub post_ts: Option<String>,
}

/// One leaderboard row: a user and their summed vote count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub user_id: String,
    pub total_upvotes: i64,
}
