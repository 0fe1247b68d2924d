//! Handler for Slack Events API callbacks.
//!
//! This module processes `event_callback` payloads:
//! - `message` - command grammar (praise awards, reports, leaderboard)
//! - `reaction_added` / `reaction_removed` - vote reconciliation

use serde_json::Value;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::helpers::{ok_challenge, ok_empty};
use super::parsing::v_str;
use crate::core::config::AppConfig;
use crate::core::models::{VoteDirection, VoteOutcome};
use crate::core::store::PraiseStore;
use crate::slack::client::PRAISE_SEED_REACTION;
use crate::slack::command_parser::{Command, parse_command};
use crate::slack::{SlackClient, message_formatter};

/// Rows shown by `;top`.
const LEADERBOARD_LIMIT: i64 = 10;

/// Handle a `url_verification` or `event_callback` payload from Slack.
///
/// # Arguments
/// - `config`: Application configuration
/// - `store`: The praise store
/// - `json_body`: The full JSON body of the event callback
///
/// # Returns
/// A JSON response value to send back to Slack.
pub async fn handle_event_callback(
    config: &AppConfig,
    store: &dyn PraiseStore,
    json_body: &Value,
) -> Value {
    // URL verification handshake
    if json_body
        .get("type")
        .and_then(|t| t.as_str())
        .is_some_and(|t| t == "url_verification")
    {
        let challenge = json_body
            .get("challenge")
            .and_then(|c| c.as_str())
            .unwrap_or("");
        return ok_challenge(challenge);
    }

    // Must be an event_callback
    let is_event_callback = json_body
        .get("type")
        .and_then(|t| t.as_str())
        .is_some_and(|t| t == "event_callback");

    if !is_event_callback {
        return ok_empty();
    }

    let Some(event) = json_body.get("event") else {
        return ok_empty();
    };

    let event_type = event.get("type").and_then(|t| t.as_str()).unwrap_or("");
    let correlation_id = Uuid::new_v4();
    info!(event_type = %event_type, correlation_id = %correlation_id, "Processing event callback");

    match event_type {
        "message" => handle_message_event(config, store, event).await,
        "reaction_added" => {
            handle_reaction_event(config, store, event, VoteDirection::Up).await
        }
        "reaction_removed" => {
            handle_reaction_event(config, store, event, VoteDirection::Down).await
        }
        _ => {
            // No-op for other events
            ok_empty()
        }
    }
}

// ============================================================================
// Message Events
// ============================================================================

async fn handle_message_event(config: &AppConfig, store: &dyn PraiseStore, event: &Value) -> Value {
    // Ignore bot messages and edited/system messages to avoid loops
    if event.get("bot_id").is_some() || event.get("subtype").is_some() {
        return ok_empty();
    }

    let channel_id = v_str(event, &["channel"]).unwrap_or("");
    let user_id = v_str(event, &["user"]).unwrap_or("");
    let text = v_str(event, &["text"]).unwrap_or("");
    let ts = v_str(event, &["ts"]).unwrap_or("");

    if channel_id.is_empty() || user_id.is_empty() || text.is_empty() || ts.is_empty() {
        return ok_empty();
    }

    match parse_command(text) {
        Some(Command::MyPraises) => handle_my_praises(config, store, channel_id, user_id).await,
        Some(Command::UserPraises { user_id: target }) => {
            handle_user_praises(config, store, channel_id, user_id, &target).await
        }
        Some(Command::Top) => handle_top(config, store, channel_id, user_id).await,
        Some(Command::Praise {
            user_id: praised_id,
            reason,
        }) => handle_praise(config, store, channel_id, user_id, ts, &praised_id, &reason).await,
        None => ok_empty(),
    }
}

async fn handle_my_praises(
    config: &AppConfig,
    store: &dyn PraiseStore,
    channel_id: &str,
    user_id: &str,
) -> Value {
    let entries = match store.user_praises(user_id).await {
        Ok(entries) => entries,
        Err(e) => {
            error!("Praise report query failed: {}", e);
            return ok_empty();
        }
    };

    let message = match entries {
        Some(entries) => message_formatter::format_own_report(&entries),
        None => message_formatter::no_praises_notice(user_id),
    };

    post_ephemeral(config, channel_id, user_id, &message).await;
    ok_empty()
}

async fn handle_user_praises(
    config: &AppConfig,
    store: &dyn PraiseStore,
    channel_id: &str,
    requester_id: &str,
    target_id: &str,
) -> Value {
    let entries = match store.user_praises(target_id).await {
        Ok(entries) => entries,
        Err(e) => {
            error!("Praise report query failed: {}", e);
            return ok_empty();
        }
    };

    let message = match entries {
        Some(entries) => message_formatter::format_user_report(target_id, &entries),
        None => message_formatter::user_no_praises_notice(target_id),
    };

    post_ephemeral(config, channel_id, requester_id, &message).await;
    ok_empty()
}

async fn handle_top(
    config: &AppConfig,
    store: &dyn PraiseStore,
    channel_id: &str,
    user_id: &str,
) -> Value {
    let rows = match store.top_users(LEADERBOARD_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Leaderboard query failed: {}", e);
            return ok_empty();
        }
    };

    let message = message_formatter::format_leaderboard(&rows);
    post_ephemeral(config, channel_id, user_id, &message).await;
    ok_empty()
}

async fn handle_praise(
    config: &AppConfig,
    store: &dyn PraiseStore,
    channel_id: &str,
    praiser_id: &str,
    ts: &str,
    praised_id: &str,
    reason: &str,
) -> Value {
    if praised_id == praiser_id {
        let notice = message_formatter::self_praise_notice(praised_id);
        post_ephemeral(config, channel_id, praiser_id, &notice).await;
        return ok_empty();
    }

    let total = match store.record_praise(ts, praised_id, praiser_id, reason).await {
        Ok(total) => total,
        Err(e) => {
            error!("Failed to record praise: {}", e);
            return ok_empty();
        }
    };

    info!(praised_id = %praised_id, total_upvotes = total, "Recorded praise");

    let client = SlackClient::new(config.slack_bot_token.clone());

    // Seed the praise message with the bot's own +1 reaction
    if let Err(e) = client
        .add_reaction(channel_id, ts, PRAISE_SEED_REACTION)
        .await
    {
        error!("Failed to add seed reaction: {}", e);
    }

    let announcement =
        message_formatter::format_praise_announcement(praised_id, praiser_id, reason, 1, total);

    match client
        .post_message_in_thread(channel_id, ts, &announcement)
        .await
    {
        Ok(post_ts) => {
            if let Err(e) = store.record_post(ts, &post_ts).await {
                error!("Failed to record tally post timestamp: {}", e);
            }
        }
        Err(e) => error!("Failed to post tally message: {}", e),
    }

    ok_empty()
}

// ============================================================================
// Reaction Events
// ============================================================================

async fn handle_reaction_event(
    config: &AppConfig,
    store: &dyn PraiseStore,
    event: &Value,
    direction: VoteDirection,
) -> Value {
    let user_id = v_str(event, &["user"]).unwrap_or("");
    let ts = v_str(event, &["item", "ts"]).unwrap_or("");
    let channel_id = v_str(event, &["item", "channel"]).unwrap_or("");

    if user_id.is_empty() || ts.is_empty() || channel_id.is_empty() {
        return ok_empty();
    }

    let client = SlackClient::new(config.slack_bot_token.clone());

    // The bot seeds each praise with its own reaction; never count those.
    match client.get_bot_user_id().await {
        Ok(bot_id) if bot_id == user_id => return ok_empty(),
        Ok(_) => {}
        Err(e) => {
            // Without the bot id the reactor cannot be attributed safely
            error!("auth.test failed, dropping reaction event: {}", e);
            return ok_empty();
        }
    }

    match store.record_vote(ts, user_id, direction).await {
        Err(e) => {
            error!("Failed to record vote: {}", e);
            ok_empty()
        }
        Ok(VoteOutcome::NotFound) => {
            debug!("Reaction does not concern a praise message");
            ok_empty()
        }
        Ok(VoteOutcome::Rejected) => {
            let notice = message_formatter::vote_rejected_notice(user_id);
            post_ephemeral(config, channel_id, user_id, &notice).await;
            ok_empty()
        }
        Ok(VoteOutcome::Applied(update)) => {
            info!(
                praised_id = %update.praised_id,
                entry_upvotes = update.entry_upvotes,
                total_upvotes = update.total_upvotes,
                "Applied vote"
            );

            if let Some(post_ts) = &update.post_ts {
                let text = message_formatter::format_praise_announcement(
                    &update.praised_id,
                    &update.praiser_id,
                    &update.reason,
                    update.entry_upvotes,
                    update.total_upvotes,
                );
                if let Err(e) = client.update_message(channel_id, post_ts, &text).await {
                    error!("Failed to update tally message: {}", e);
                }
            }

            ok_empty()
        }
    }
}

// ============================================================================
// Shared
// ============================================================================

async fn post_ephemeral(config: &AppConfig, channel_id: &str, user_id: &str, message: &str) {
    let client = SlackClient::new(config.slack_bot_token.clone());
    if let Err(e) = client.post_ephemeral(channel_id, user_id, message).await {
        error!("Failed to post ephemeral message: {}", e);
    }
}
