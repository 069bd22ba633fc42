use crate::error::{config::ConfigError, AppError};

/// DISBOARD's application ID, the promotion bot whose bump replies are tracked.
const DEFAULT_BUMP_BOT_ID: u64 = 302050872383242240;
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Author ID whose messages are inspected for bump signals.
    pub bump_bot_id: u64,

    pub bind_address: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            bump_bot_id: parse_optional("BUMP_BOT_ID", DEFAULT_BUMP_BOT_ID)?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            port: parse_optional("PORT", DEFAULT_PORT)?,
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_optional<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(default),
    }
}
