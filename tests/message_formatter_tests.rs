use chrono::Utc;
use kudos::core::models::{LeaderboardRow, PraiseEntry};
use kudos::slack::message_formatter::{
    format_leaderboard, format_own_report, format_praise_announcement, format_user_report,
    no_praises_notice, self_praise_notice, user_no_praises_notice, vote_rejected_notice,
};

/// Tests for the user-facing message formatting.
/// The tally announcement in particular must stay stable: the same function
/// renders both the initial post and every subsequent edit.

fn entry(reason: &str, upvotes: i64) -> PraiseEntry {
    PraiseEntry {
        praise_ts: "1700000000.000100".to_string(),
        praised_id: "U_PRAISED".to_string(),
        praiser_id: "U_PRAISER".to_string(),
        reason: reason.to_string(),
        upvotes,
        post_ts: None,
        created_at: Utc::now(),
    }
}

#[test]
fn test_praise_announcement_format() {
    let message =
        format_praise_announcement("U_PRAISED", "U_PRAISER", "helping review code", 1, 5);

    assert!(
        message.contains("<@U_PRAISED> received a praise from <@U_PRAISER>"),
        "Announcement should mention both parties"
    );
    assert!(
        message.contains("for helping review code"),
        "Announcement should carry the reason"
    );
    assert!(
        message.contains("*1* point for this and *5* points total"),
        "Announcement should show the entry count and the total"
    );
}

#[test]
fn test_praise_announcement_reflects_updated_counts() {
    let initial = format_praise_announcement("U_A", "U_B", "the migration", 1, 1);
    let updated = format_praise_announcement("U_A", "U_B", "the migration", 2, 2);

    assert_ne!(initial, updated);
    assert!(updated.contains("*2* point for this and *2* points total"));
}

#[test]
fn test_own_report_numbering_and_order() {
    // The store returns entries sorted by descending count; the formatter
    // just numbers them in order.
    let entries = vec![entry("the incident writeup", 7), entry("code review", 2)];
    let message = format_own_report(&entries);

    assert!(message.starts_with("*Your praises:*\n"));
    assert!(message.contains("1.the incident writeup (7 points)\n"));
    assert!(message.contains("2.code review (2 points)\n"));
}

#[test]
fn test_user_report_header() {
    let entries = vec![entry("pairing on the parser", 3)];
    let message = format_user_report("U_PRAISED", &entries);

    assert!(message.starts_with("*<@U_PRAISED>'s praises:*\n"));
    assert!(message.contains("1.pairing on the parser (3 points)\n"));
}

#[test]
fn test_leaderboard_format() {
    let rows = vec![
        LeaderboardRow {
            user_id: "U_FIRST".to_string(),
            total_upvotes: 12,
        },
        LeaderboardRow {
            user_id: "U_SECOND".to_string(),
            total_upvotes: 4,
        },
    ];
    let message = format_leaderboard(&rows);

    assert!(message.starts_with("*Top 10 Users:*\n"));
    assert!(message.contains("1. <@U_FIRST> - 12 upvotes\n"));
    assert!(message.contains("2. <@U_SECOND> - 4 upvotes\n"));
}

#[test]
fn test_notices_mention_the_user() {
    assert_eq!(
        self_praise_notice("U123"),
        "<@U123>, you cannot praise yourself!"
    );
    assert_eq!(
        vote_rejected_notice("U123"),
        "<@U123>, you cannot praise yourself or someone you've already praised for this reason!"
    );
    assert_eq!(
        no_praises_notice("U123"),
        "<@U123>, you don't have any praises yet."
    );
    assert_eq!(
        user_no_praises_notice("U123"),
        "<@U123> doesn't have any praises yet."
    );
}
