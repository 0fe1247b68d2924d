use chrono::Utc;
use kudos::core::models::{PraiseEntry, VoteDecision, VoteDirection, reconcile_vote};

/// Tests for the vote-reconciliation decision: correlating a reaction event
/// to a praise entry and deciding how the count moves.

fn entry(praised: &str, praiser: &str, upvotes: i64) -> PraiseEntry {
    PraiseEntry {
        praise_ts: "1700000000.000100".to_string(),
        praised_id: praised.to_string(),
        praiser_id: praiser.to_string(),
        reason: "helping review code".to_string(),
        upvotes,
        post_ts: Some("1700000000.000200".to_string()),
        created_at: Utc::now(),
    }
}

#[test]
fn test_reaction_on_non_praise_message() {
    // Reactions on ordinary messages carry timestamps no entry knows
    let decision = reconcile_vote(None, "U_ANYONE", VoteDirection::Up);
    assert_eq!(decision, VoteDecision::NotFound);
}

#[test]
fn test_praiser_cannot_vote_on_own_entry() {
    let e = entry("U_PRAISED", "U_PRAISER", 1);
    assert_eq!(
        reconcile_vote(Some(&e), "U_PRAISER", VoteDirection::Up),
        VoteDecision::Rejected
    );
}

#[test]
fn test_praised_user_cannot_vote_on_own_entry() {
    let e = entry("U_PRAISED", "U_PRAISER", 1);
    assert_eq!(
        reconcile_vote(Some(&e), "U_PRAISED", VoteDirection::Up),
        VoteDecision::Rejected
    );
}

#[test]
fn test_party_check_applies_to_removals_too() {
    let e = entry("U_PRAISED", "U_PRAISER", 4);
    assert_eq!(
        reconcile_vote(Some(&e), "U_PRAISER", VoteDirection::Down),
        VoteDecision::Rejected
    );
}

#[test]
fn test_third_party_reaction_increments() {
    let e = entry("U_PRAISED", "U_PRAISER", 1);
    assert_eq!(
        reconcile_vote(Some(&e), "U_OTHER", VoteDirection::Up),
        VoteDecision::Apply { new_upvotes: 2 }
    );
}

#[test]
fn test_add_then_remove_restores_original_count() {
    let mut e = entry("U_PRAISED", "U_PRAISER", 3);
    let original = e.upvotes;

    let VoteDecision::Apply { new_upvotes } = reconcile_vote(Some(&e), "U_OTHER", VoteDirection::Up)
    else {
        panic!("expected the vote to apply");
    };
    e.upvotes = new_upvotes;

    let VoteDecision::Apply { new_upvotes } =
        reconcile_vote(Some(&e), "U_OTHER", VoteDirection::Down)
    else {
        panic!("expected the vote to apply");
    };
    e.upvotes = new_upvotes;

    assert_eq!(e.upvotes, original);
}

#[test]
fn test_removals_can_push_count_negative() {
    let e = entry("U_PRAISED", "U_PRAISER", 0);
    assert_eq!(
        reconcile_vote(Some(&e), "U_OTHER", VoteDirection::Down),
        VoteDecision::Apply { new_upvotes: -1 }
    );
}
