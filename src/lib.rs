/// Kudos - a Slack bot that lets users award and track praise points for each other.
///
/// The bot listens to Slack Events API callbacks delivered to a single API
/// Lambda, recognizes a small command grammar in channel messages, and keeps
/// a per-user store of praise entries in PostgreSQL. Emoji reactions on a
/// praise message adjust that entry's vote count, and the bot edits its
/// posted tally message to reflect the new counts.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - slack-morphism for Slack API interactions
/// - sqlx/PostgreSQL for the praise store
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use kudos::core::config::AppConfig;
/// use kudos::core::store::PraiseStore;
/// use kudos::slack::SlackClient;
/// use kudos::store::PgPraiseStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     kudos::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let store = PgPraiseStore::connect(&config).await?;
///
///     // Record a praise and report the running total back to the praiser
///     let total = store
///         .record_praise(
///             "1700000000.000100",
///             "U02PRAISED",
///             "U03PRAISER",
///             "helping review code",
///         )
///         .await?;
///
///     let client = SlackClient::new(config.slack_bot_token.clone());
///     client
///         .post_ephemeral(
///             "C01CHANNEL",
///             "U03PRAISER",
///             &format!("They now have {total} points"),
///         )
///         .await?;
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;
pub mod store;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at the start of the Lambda binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
