//! Formatting of every user-facing bot message.
//!
//! Centralized so the tally announcement posted on praise and the edit
//! applied on each vote stay character-identical apart from the counts.

use crate::core::models::{LeaderboardRow, PraiseEntry};

/// The tally message posted under a praise and rewritten on every vote.
#[must_use]
pub fn format_praise_announcement(
    praised_id: &str,
    praiser_id: &str,
    reason: &str,
    entry_upvotes: i64,
    total_upvotes: i64,
) -> String {
    format!(
        "<@{praised_id}> received a praise from <@{praiser_id}> for {reason}\n\n\
         They now have *{entry_upvotes}* point for this and *{total_upvotes}* points total 👏"
    )
}

/// The sender's own praise report, entries already sorted by the store.
#[must_use]
pub fn format_own_report(entries: &[PraiseEntry]) -> String {
    format_report("*Your praises:*", entries)
}

/// Another user's praise report.
#[must_use]
pub fn format_user_report(user_id: &str, entries: &[PraiseEntry]) -> String {
    format_report(&format!("*<@{user_id}>'s praises:*"), entries)
}

fn format_report(header: &str, entries: &[PraiseEntry]) -> String {
    let mut message = format!("{header}\n");
    for (idx, entry) in entries.iter().enumerate() {
        message.push_str(&format!(
            "{}.{} ({} points)\n",
            idx + 1,
            entry.reason,
            entry.upvotes
        ));
    }
    message
}

/// The workspace leaderboard.
#[must_use]
pub fn format_leaderboard(rows: &[LeaderboardRow]) -> String {
    let mut message = String::from("*Top 10 Users:*\n");
    for (rank, row) in rows.iter().enumerate() {
        message.push_str(&format!(
            "{}. <@{}> - {} upvotes\n",
            rank + 1,
            row.user_id,
            row.total_upvotes
        ));
    }
    message
}

#[must_use]
pub fn self_praise_notice(user_id: &str) -> String {
    format!("<@{user_id}>, you cannot praise yourself!")
}

/// Self-vote and duplicate-vote rejections share one message.
#[must_use]
pub fn vote_rejected_notice(user_id: &str) -> String {
    format!("<@{user_id}>, you cannot praise yourself or someone you've already praised for this reason!")
}

#[must_use]
pub fn no_praises_notice(user_id: &str) -> String {
    format!("<@{user_id}>, you don't have any praises yet.")
}

#[must_use]
pub fn user_no_praises_notice(user_id: &str) -> String {
    format!("<@{user_id}> doesn't have any praises yet.")
}
