use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KudosError {
    #[error("Failed to parse Slack event: {0}")]
    ParseError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access praise store: {0}")]
    DatabaseError(String),
}

impl From<SlackClientError> for KudosError {
    fn from(error: SlackClientError) -> Self {
        KudosError::ApiError(error.to_string())
    }
}

impl From<reqwest::Error> for KudosError {
    fn from(error: reqwest::Error) -> Self {
        KudosError::HttpError(error.to_string())
    }
}

impl From<sqlx::Error> for KudosError {
    fn from(error: sqlx::Error) -> Self {
        KudosError::DatabaseError(error.to_string())
    }
}

impl From<anyhow::Error> for KudosError {
    fn from(error: anyhow::Error) -> Self {
        KudosError::ApiError(error.to_string())
    }
}
