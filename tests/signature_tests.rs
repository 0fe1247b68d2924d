use std::time::{SystemTime, UNIX_EPOCH};

use kudos::api::signature::{compute_signature, verify_slack_signature};

fn now_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs()
        .to_string()
}

#[test]
fn test_computed_signature_verifies() {
    let secret = "8f742231b10e8888abcd99yyyzzz85a5";
    let body = r#"{"type":"event_callback","event":{"type":"message"}}"#;
    let timestamp = now_timestamp();

    let signature = compute_signature(&timestamp, body, secret).expect("signature computes");
    assert!(signature.starts_with("v0="));
    assert!(verify_slack_signature(body, &timestamp, &signature, secret));
}

#[test]
fn test_tampered_body_fails_verification() {
    let secret = "8f742231b10e8888abcd99yyyzzz85a5";
    let timestamp = now_timestamp();

    let signature =
        compute_signature(&timestamp, "original body", secret).expect("signature computes");
    assert!(!verify_slack_signature(
        "tampered body",
        &timestamp,
        &signature,
        secret
    ));
}

#[test]
fn test_wrong_secret_fails_verification() {
    let body = "payload";
    let timestamp = now_timestamp();

    let signature = compute_signature(&timestamp, body, "secret-a").expect("signature computes");
    assert!(!verify_slack_signature(body, &timestamp, &signature, "secret-b"));
}

#[test]
fn test_stale_timestamp_is_rejected_as_replay() {
    let secret = "8f742231b10e8888abcd99yyyzzz85a5";
    let body = "payload";
    // Well outside the five-minute window
    let timestamp = "1609753200";

    let signature = compute_signature(timestamp, body, secret).expect("signature computes");
    assert!(!verify_slack_signature(body, timestamp, &signature, secret));
}
