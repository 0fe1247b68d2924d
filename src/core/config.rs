use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_signing_secret: String,
    pub slack_bot_token: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            slack_signing_secret: env::var("SLACK_SIGNING_SECRET")
                .map_err(|e| format!("SLACK_SIGNING_SECRET: {}", e))?,
            slack_bot_token: env::var("SLACK_BOT_TOKEN")
                .map_err(|e| format!("SLACK_BOT_TOKEN: {}", e))?,
            database_url: env::var("DATABASE_URL").map_err(|e| format!("DATABASE_URL: {}", e))?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            database_min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        })
    }
}
