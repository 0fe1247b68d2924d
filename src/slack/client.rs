//! Slack API client module
//!
//! Encapsulates all outbound Slack API interactions with retry logic and
//! error handling.

use reqwest::Client;
use serde_json::{Value, json};
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::{SlackApiChatPostEphemeralRequest, SlackApiReactionsAddRequest};
use slack_morphism::{
    SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent, SlackReactionName,
    SlackTs, SlackUserId,
};
use std::time::Duration;
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::warn;

use crate::errors::KudosError;

// Build the Slack client connector without panicking. If construction fails,
// store None and surface a KudosError at call sites.
static SLACK_CLIENT: std::sync::LazyLock<Option<SlackHyperClient>> =
    std::sync::LazyLock::new(|| match SlackClientHyperConnector::new() {
        Ok(connector) => Some(SlackHyperClient::new(connector)),
        Err(e) => {
            warn!("Failed to create Slack HTTP connector: {}", e);
            None
        }
    });

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Emoji the bot adds to each praise message so it starts with one visible vote.
pub const PRAISE_SEED_REACTION: &str = "heavy_plus_sign";

/// Slack API client with retry logic and error handling
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }

    #[must_use]
    pub fn token(&self) -> &SlackApiToken {
        &self.token
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, KudosError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, KudosError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        Retry::spawn(strategy, operation).await
    }

    /// The bot's own user id via `auth.test`. Used to drop the bot's own
    /// reaction events.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack API call fails.
    pub async fn get_bot_user_id(&self) -> Result<String, KudosError> {
        self.with_retry(|| async {
            let session = SLACK_CLIENT
                .as_ref()
                .ok_or_else(|| {
                    KudosError::ApiError("Slack HTTP connector not initialized".to_string())
                })?
                .open_session(&self.token);

            let test_resp = session.auth_test().await?;

            Ok(test_resp.user_id.0)
        })
        .await
    }

    /// Post an ephemeral message only `user_id` can see.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack API call fails.
    pub async fn post_ephemeral(
        &self,
        channel_id: &str,
        user_id: &str,
        message: &str,
    ) -> Result<(), KudosError> {
        self.with_retry(|| async {
            let session = SLACK_CLIENT
                .as_ref()
                .ok_or_else(|| {
                    KudosError::ApiError("Slack HTTP connector not initialized".to_string())
                })?
                .open_session(&self.token);

            let post_req = SlackApiChatPostEphemeralRequest::new(
                SlackChannelId(channel_id.to_string()),
                SlackUserId(user_id.to_string()),
                SlackMessageContent::new().with_text(message.to_string()),
            );

            session.chat_post_ephemeral(&post_req).await?;

            Ok(())
        })
        .await
    }

    /// Add an emoji reaction to a message.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack API call fails.
    pub async fn add_reaction(
        &self,
        channel_id: &str,
        ts: &str,
        reaction: &str,
    ) -> Result<(), KudosError> {
        self.with_retry(|| async {
            let session = SLACK_CLIENT
                .as_ref()
                .ok_or_else(|| {
                    KudosError::ApiError("Slack HTTP connector not initialized".to_string())
                })?
                .open_session(&self.token);

            let add_req = SlackApiReactionsAddRequest::new(
                SlackChannelId(channel_id.to_string()),
                SlackReactionName(reaction.to_string()),
                SlackTs(ts.to_string()),
            );

            session.reactions_add(&add_req).await?;

            Ok(())
        })
        .await
    }

    /// Post a plain-text reply into a specific thread and return the posted
    /// message's timestamp, which the caller stores so the tally can be
    /// edited later.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Slack returns an error.
    pub async fn post_message_in_thread(
        &self,
        channel_id: &str,
        thread_ts: &str,
        message: &str,
    ) -> Result<String, KudosError> {
        let payload = json!({
            "channel": channel_id,
            "text": message,
            "thread_ts": thread_ts,
        });

        self.with_retry(|| async {
            let resp = HTTP_CLIENT
                .post("https://slack.com/api/chat.postMessage")
                .bearer_auth(&self.token.token_value.0)
                .json(&payload)
                .send()
                .await
                .map_err(|e| {
                    KudosError::HttpError(format!("Failed to post thread message: {e}"))
                })?;

            if !resp.status().is_success() {
                return Err(KudosError::ApiError(format!(
                    "chat.postMessage HTTP {}",
                    resp.status()
                )));
            }

            let body: Value = resp.json().await.map_err(|e| {
                KudosError::ParseError(format!("chat.postMessage JSON parse error: {e}"))
            })?;

            if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
                return Err(KudosError::ApiError(format!(
                    "chat.postMessage error: {}",
                    body.get("error")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown")
                )));
            }

            body.get("ts")
                .and_then(Value::as_str)
                .map(std::string::ToString::to_string)
                .ok_or_else(|| {
                    KudosError::ParseError("chat.postMessage response missing ts".to_string())
                })
        })
        .await
    }

    /// Update an existing message via Slack's `chat.update` API.
    ///
    /// Used to rewrite the tally message after a vote changes an entry's
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack API request or response parsing fails.
    pub async fn update_message(
        &self,
        channel_id: &str,
        ts: &str,
        text: &str,
    ) -> Result<(), KudosError> {
        let payload = json!({
            "channel": channel_id,
            "ts": ts,
            "text": text,
        });

        self.with_retry(|| async {
            let resp = HTTP_CLIENT
                .post("https://slack.com/api/chat.update")
                .bearer_auth(&self.token.token_value.0)
                .json(&payload)
                .send()
                .await
                .map_err(|e| KudosError::HttpError(format!("Failed to update message: {e}")))?;

            if !resp.status().is_success() {
                return Err(KudosError::ApiError(format!(
                    "chat.update HTTP {}",
                    resp.status()
                )));
            }

            let body: Value = resp.json().await.map_err(|e| {
                KudosError::ParseError(format!("chat.update JSON parse error: {e}"))
            })?;

            if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
                return Err(KudosError::ApiError(format!(
                    "chat.update error: {}",
                    body.get("error")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown")
                )));
            }

            Ok(())
        })
        .await
    }
}
