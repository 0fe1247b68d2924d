//! API Lambda handler - request validation and event routing.
//!
//! This module handles:
//! - Request validation (headers, body, signature)
//! - The Events API `url_verification` handshake and `event_callback`
//!   payloads (delegated to the `event_handler` module)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{event_handler, helpers, parsing, signature};
use crate::core::config::AppConfig;
use crate::core::store::PraiseStore;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Verifies the Slack request signature, then routes Events API payloads to
/// the event handlers. Everything is processed synchronously inside the
/// invocation; the response is returned once the event is fully handled.
///
/// # Errors
///
/// Returns an error response payload if the request is malformed or fails
/// Slack signature verification; otherwise returns a 200 with a JSON body.
#[tracing::instrument(level = "info", skip(event, store))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
    store: &dyn PraiseStore,
) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // ========================================================================
    // Extract and validate headers and body
    // ========================================================================

    let Some(headers) = event.payload.get("headers") else {
        error!("Request missing headers");
        return Ok(helpers::err_response(400, "Missing headers"));
    };

    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(response) => return Ok(response),
    };

    // ========================================================================
    // Verify Slack signature
    // ========================================================================

    if let Err(response) = verify_signature(body, headers, &config) {
        return Ok(response);
    }

    info!("Slack signature verified successfully");

    // ========================================================================
    // Route Events API payloads
    // ========================================================================

    if let Ok(json_body) = serde_json::from_str::<Value>(body) {
        let body_type = json_body.get("type").and_then(|t| t.as_str()).unwrap_or("");

        if body_type == "url_verification" || body_type == "event_callback" {
            return Ok(event_handler::handle_event_callback(&config, store, &json_body).await);
        }
    }

    // The bot only subscribes to Events API callbacks; acknowledge anything
    // else so Slack does not redeliver it.
    warn!("Unrecognized request body, acknowledging without action");
    Ok(helpers::ok_empty())
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    Ok(body_str)
}

fn verify_signature(body: &str, headers: &Value, config: &AppConfig) -> Result<(), Value> {
    let Some(sig) = parsing::get_header_value(headers, "X-Slack-Signature") else {
        error!("Missing X-Slack-Signature header");
        return Err(helpers::err_response(
            401,
            "Missing X-Slack-Signature header",
        ));
    };

    let Some(timestamp) = parsing::get_header_value(headers, "X-Slack-Request-Timestamp") else {
        error!("Missing X-Slack-Request-Timestamp header");
        return Err(helpers::err_response(
            401,
            "Missing X-Slack-Request-Timestamp header",
        ));
    };

    if !signature::verify_slack_signature(body, timestamp, sig, &config.slack_signing_secret) {
        error!("Slack signature verification failed");
        return Err(helpers::err_response(401, "Invalid Slack signature"));
    }

    Ok(())
}
